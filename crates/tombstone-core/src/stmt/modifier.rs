use super::{Clause, Statement};

use std::fmt;

/// A clause that rewrites the statement it is added to.
///
/// Modifiers are produced by [`FieldHooks`](crate::schema::FieldHooks) when a
/// model is built and run by the callback processors before the statement's
/// SQL is generated. The name/build/merge surface mirrors an ordinary clause;
/// modifiers that only rewrite the statement leave all three as no-ops.
pub trait StatementModifier: fmt::Debug + Send + Sync {
    /// Name of the clause. An empty name means the modifier is never stored
    /// in the statement's clause set.
    fn name(&self) -> &str {
        ""
    }

    /// Renders the clause when its name is listed by the processor building
    /// the statement.
    fn build(&self, _stmt: &Statement, _sql: &mut String) {}

    /// Merges the modifier into a previously stored clause of the same name.
    fn merge_clause(&self, _clause: &mut Clause) {}

    /// Rewrites the statement in place.
    fn modify_statement(&self, stmt: &mut Statement);
}
