use super::{Clause, ClauseName, Expr, Statement};

use indexmap::IndexMap;

/// The SET clause of an UPDATE statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignments {
    /// Map from column name to the assignment for that column, in the order
    /// the assignments were made.
    assignments: IndexMap<String, Assignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Expression use for assignment
    pub expr: Expr,
}

impl Statement {
    pub fn assignments(&self) -> Option<&Assignments> {
        match self.clauses.get(&ClauseName::Set) {
            Some(Clause::Set(assignments)) => Some(assignments),
            _ => None,
        }
    }
}

impl Assignments {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            assignments: IndexMap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.assignments.contains_key(column)
    }

    pub fn get(&self, column: &str) -> Option<&Assignment> {
        self.assignments.get(column)
    }

    /// Sets `column` to `expr`, replacing any earlier assignment to the same
    /// column but keeping its position.
    pub fn set(&mut self, column: impl Into<String>, expr: impl Into<Expr>) {
        self.assignments.insert(
            column.into(),
            Assignment { expr: expr.into() },
        );
    }

    pub fn unset(&mut self, column: &str) {
        self.assignments.shift_remove(column);
    }

    /// Prepends `other` to these assignments. Assignments already present in
    /// `self` win over the ones in `other`.
    pub fn prepend(&mut self, other: Assignments) {
        let rest = std::mem::replace(&mut self.assignments, other.assignments);
        self.assignments.extend(rest);
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.assignments.keys().map(String::as_str)
    }

    pub fn exprs(&self) -> impl Iterator<Item = &Expr> + '_ {
        self.assignments.values().map(|assignment| &assignment.expr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Assignment)> + '_ {
        self.assignments
            .iter()
            .map(|(column, assignment)| (column.as_str(), assignment))
    }
}

impl<'a> IntoIterator for &'a Assignments {
    type Item = (&'a String, &'a Assignment);
    type IntoIter = indexmap::map::Iter<'a, String, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
