use super::{Clause, ClauseName, Expr, Statement};

/// The WHERE clause.
///
/// Conditions are kept in the order they were added. When rendered they are
/// joined with `AND`, except single-operand OR groups (see
/// [`Expr::or_chained`]) which are joined with `OR`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    pub exprs: Vec<Expr>,
}

impl Filter {
    pub fn new(expr: impl Into<Expr>) -> Filter {
        Filter {
            exprs: vec![expr.into()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn add_filter(&mut self, filter: impl Into<Filter>) {
        self.exprs.extend(filter.into().exprs);
    }

    /// Returns `true` if any top-level condition is an OR-chained term.
    pub fn has_or_chained(&self) -> bool {
        self.exprs.iter().any(Expr::is_or_chained)
    }

    /// Collapses every condition into one explicit AND group so that
    /// conditions appended afterwards are ANDed with the whole group.
    pub fn group(&mut self) {
        if self.exprs.is_empty() {
            return;
        }

        let exprs = std::mem::take(&mut self.exprs);
        self.exprs.push(Expr::and_group(exprs));
    }
}

impl Statement {
    pub fn filter(&self) -> Option<&Filter> {
        match self.clauses.get(&ClauseName::Where) {
            Some(Clause::Where(filter)) => Some(filter),
            _ => None,
        }
    }

    pub fn filter_mut(&mut self) -> Option<&mut Filter> {
        match self.clauses.get_mut(&ClauseName::Where) {
            Some(Clause::Where(filter)) => Some(filter),
            _ => None,
        }
    }

    /// ANDs `expr` with every condition already on the statement.
    ///
    /// A trailing OR-chained term would absorb a plainly appended condition,
    /// so an OR-chained filter is grouped first.
    pub fn and_filter(&mut self, expr: impl Into<Expr>) {
        if let Some(filter) = self.filter_mut() {
            if filter.has_or_chained() {
                filter.group();
            }
        }

        self.add_clause(Filter::new(expr));
    }

    /// Returns `true` if the statement carries at least one WHERE condition.
    pub fn has_conditions(&self) -> bool {
        self.filter().is_some_and(|filter| !filter.is_empty())
    }
}

impl From<Expr> for Filter {
    fn from(value: Expr) -> Self {
        Filter::new(value)
    }
}

impl From<Vec<Expr>> for Filter {
    fn from(exprs: Vec<Expr>) -> Self {
        Filter { exprs }
    }
}
