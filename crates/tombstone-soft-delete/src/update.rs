use crate::QueryClause;

use tombstone_core::stmt::{Statement, StatementModifier};

/// Keeps UPDATE statements away from soft-deleted rows.
#[derive(Debug, Clone)]
pub struct UpdateClause {
    query: QueryClause,
}

impl UpdateClause {
    pub fn new(query: QueryClause) -> UpdateClause {
        UpdateClause { query }
    }
}

impl StatementModifier for UpdateClause {
    fn modify_statement(&self, stmt: &mut Statement) {
        if !stmt.is_built() && !stmt.unscoped {
            self.query.apply(stmt);
        }
    }
}
