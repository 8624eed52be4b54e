use crate::{Flag, ENABLED_MARKER};

use tombstone_core::{
    schema::Field,
    stmt::{Clause, ClauseName, Expr, Statement, StatementModifier},
};

/// Excludes soft-deleted rows from a statement.
///
/// Appends `<table>.<column> = false`, or `<table>.<column> IS NULL` when the
/// flag column defaults to null, to the WHERE clause. Applied at most once per
/// statement and never to unscoped statements.
#[derive(Debug, Clone)]
pub struct QueryClause {
    column: String,
    null_sentinel: bool,
}

impl QueryClause {
    pub fn new(field: &Field) -> QueryClause {
        QueryClause {
            column: field.column_name().to_string(),
            null_sentinel: field.defaults_to_null(),
        }
    }

    /// Condition matching rows that have not been soft deleted.
    pub fn active_condition(&self) -> Expr {
        let column = Expr::current_column(&self.column);

        if self.null_sentinel {
            Expr::is_null(column)
        } else {
            Expr::eq(column, Flag::Active)
        }
    }

    pub(crate) fn apply(&self, stmt: &mut Statement) {
        let marker = ClauseName::named(ENABLED_MARKER);

        if stmt.unscoped || stmt.has_clause(&marker) {
            return;
        }

        tracing::debug!(table = %stmt.table, column = %self.column, "excluding soft-deleted rows");

        stmt.and_filter(self.active_condition());
        stmt.insert_clause(marker, Clause::Marker);
    }
}

impl StatementModifier for QueryClause {
    fn modify_statement(&self, stmt: &mut Statement) {
        self.apply(stmt);
    }
}
