use crate::{strategy::companion_sentinel, Flag, QueryClause};

use tombstone_core::{
    schema::Field,
    stmt::{Assignments, Clause, Op, Statement, StatementModifier, Type},
    Error,
};

/// Rewrites a DELETE into an UPDATE that flags the targeted rows.
///
/// The rewritten statement sets the flag (and the companion field, if any),
/// targets the primary keys of the bound records, and skips rows that are
/// already flagged, so deleting twice affects nothing.
#[derive(Debug, Clone)]
pub struct DeleteClause {
    column: String,
    companion: Option<(String, Type)>,
    query: QueryClause,
}

impl DeleteClause {
    pub fn new(field: &Field, query: QueryClause) -> DeleteClause {
        DeleteClause {
            column: field.column_name().to_string(),
            companion: None,
            query,
        }
    }

    pub fn companion(mut self, field: &Field) -> DeleteClause {
        self.companion = Some((field.column_name().to_string(), field.ty));
        self
    }

    fn assignments(&self, stmt: &mut Statement) -> Assignments {
        let mut set = Assignments::with_capacity(2);

        set.set(&self.column, Flag::Deleted);
        stmt.set_column(&self.column, Flag::Deleted);

        if let Some((column, ty)) = &self.companion {
            let value = companion_sentinel(*ty, || stmt.now().into());
            set.set(column, value.clone());
            stmt.set_column(column, value);
        }

        set
    }

    /// Adds key predicates for the bound destination and, when it is a
    /// different set of records, for the model value. Returns `true` if any
    /// predicate was added.
    fn add_key_predicates(stmt: &mut Statement) -> bool {
        let mut added = false;

        if let Some(condition) = stmt.key_condition(&stmt.dest) {
            stmt.and_filter(condition);
            added = true;
        }

        if stmt.dest.is_addressable() && !stmt.model.is_none() && stmt.dest != stmt.model {
            if let Some(condition) = stmt.key_condition(&stmt.model) {
                stmt.and_filter(condition);
                added = true;
            }
        }

        added
    }
}

impl StatementModifier for DeleteClause {
    fn modify_statement(&self, stmt: &mut Statement) {
        if stmt.is_built() || stmt.unscoped {
            return;
        }

        let had_conditions = stmt.has_conditions();
        let keyed = DeleteClause::add_key_predicates(stmt);

        if !keyed && !had_conditions && !stmt.allow_global_update {
            tracing::warn!(table = %stmt.table, "soft delete without key or condition");
            stmt.add_error(Error::missing_where_clause());
            return;
        }

        let set = self.assignments(stmt);
        stmt.add_clause(set);

        self.query.apply(stmt);

        stmt.op = Op::Update;
        stmt.add_clause_if_not_exists(Clause::Update);

        let clauses = stmt.cx().callbacks.update.clauses.clone();
        stmt.build(&clauses);

        tracing::debug!(table = %stmt.table, sql = %stmt.sql, "rewrote delete as soft delete");
    }
}
