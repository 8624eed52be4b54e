use super::{BuildContext, Clause, ClauseName, Clauses, Dest, StatementModifier, Value};
use crate::{schema::Model, Error};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::sync::Arc;

/// The kind of SQL a statement produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Query,
    Create,
    Update,
    Delete,
}

/// A statement being built.
///
/// Callers and statement modifiers add clauses; the processor for the
/// statement's operation then renders them into `sql`. Once `sql` is non-empty
/// the statement is considered built and later build steps leave it alone.
#[derive(Debug, Clone)]
pub struct Statement {
    /// The kind of statement being built
    pub op: Op,

    /// Table the statement targets
    pub table: String,

    /// Schema of the model the statement targets, if any
    pub schema: Option<Arc<Model>>,

    /// Clauses added so far
    pub clauses: Clauses,

    /// Records the statement reads into or writes from
    pub dest: Dest,

    /// The model value the statement was started from. Usually the same
    /// records as `dest`, but batch operations may bind a different set.
    pub model: Dest,

    /// When `true`, statement modifiers must not filter or rewrite the
    /// statement
    pub unscoped: bool,

    /// Allows UPDATE and DELETE statements without any condition
    pub allow_global_update: bool,

    /// Generated SQL. Empty until the statement is built.
    pub sql: String,

    /// Bound parameters referenced by `sql`
    pub params: Vec<Value>,

    /// Column values set while building, see [`Statement::set_column`]
    changes: IndexMap<String, Value>,

    /// First error recorded while building
    error: Option<Error>,

    cx: Arc<BuildContext>,
}

impl Statement {
    pub fn new(op: Op, table: impl Into<String>, cx: Arc<BuildContext>) -> Statement {
        Statement {
            op,
            table: table.into(),
            schema: None,
            clauses: Clauses::default(),
            dest: Dest::None,
            model: Dest::None,
            unscoped: false,
            allow_global_update: false,
            sql: String::new(),
            params: vec![],
            changes: IndexMap::new(),
            error: None,
            cx,
        }
    }

    /// Starts a statement against the table of `model`.
    pub fn for_model(op: Op, model: Arc<Model>, cx: Arc<BuildContext>) -> Statement {
        let mut stmt = Statement::new(op, model.table.clone(), cx);
        stmt.schema = Some(model);
        stmt
    }

    pub fn cx(&self) -> &BuildContext {
        &self.cx
    }

    /// Current time according to the statement's clock.
    pub fn now(&self) -> DateTime<Utc> {
        (self.cx.now)()
    }

    pub fn is_built(&self) -> bool {
        !self.sql.is_empty()
    }

    pub fn clause(&self, name: &ClauseName) -> Option<&Clause> {
        self.clauses.get(name)
    }

    pub fn has_clause(&self, name: &ClauseName) -> bool {
        self.clauses.contains_key(name)
    }

    /// Adds a clause, merging it with an existing clause of the same name.
    ///
    /// # Panics
    ///
    /// If the clause has no intrinsic name. Use [`Statement::insert_clause`]
    /// for markers and custom clauses.
    #[track_caller]
    pub fn add_clause(&mut self, clause: impl Into<Clause>) {
        let clause = clause.into();
        let Some(name) = clause.name() else {
            panic!("clause has no name; clause={clause:#?}");
        };

        match self.clauses.get_mut(&name) {
            Some(existing) => existing.merge(clause),
            None => {
                self.clauses.insert(name, clause);
            }
        }
    }

    /// Adds a clause only when no clause of the same name is present.
    #[track_caller]
    pub fn add_clause_if_not_exists(&mut self, clause: impl Into<Clause>) {
        let clause = clause.into();
        let Some(name) = clause.name() else {
            panic!("clause has no name; clause={clause:#?}");
        };

        self.clauses.entry(name).or_insert(clause);
    }

    /// Stores a clause under an explicit name, replacing any previous one.
    pub fn insert_clause(&mut self, name: ClauseName, clause: Clause) {
        self.clauses.insert(name, clause);
    }

    /// Adds a statement modifier.
    ///
    /// Named modifiers are stored as custom clauses first (merging into an
    /// existing clause of the same name), then every modifier gets to rewrite
    /// the statement.
    pub fn add_modifier(&mut self, modifier: Arc<dyn StatementModifier>) {
        let name = modifier.name();

        if !name.is_empty() {
            let name = ClauseName::named(name);
            match self.clauses.get_mut(&name) {
                Some(clause) => modifier.merge_clause(clause),
                None => {
                    self.clauses.insert(name, Clause::Custom(modifier.clone()));
                }
            }
        }

        modifier.modify_statement(self);
    }

    /// Sets `column` to `value` on every bound record and records the change.
    pub fn set_column(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();

        for record in self.dest.records_mut() {
            record.insert(column.clone(), value.clone());
        }

        for record in self.model.records_mut() {
            record.insert(column.clone(), value.clone());
        }

        self.changes.insert(column, value);
    }

    /// Returns `true` if `column` was set while building.
    pub fn changed(&self, column: &str) -> bool {
        self.changes.contains_key(column)
    }

    /// Column values set while building, in the order they were set.
    pub fn changes(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.changes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Records an error. Only the first error is kept.
    pub fn add_error(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    /// Renders the named clauses into `sql` through the statement's dialect.
    pub fn build(&mut self, clauses: &[ClauseName]) {
        let dialect = self.cx.dialect.clone();
        let mut params = std::mem::take(&mut self.params);
        let sql = dialect.build(self, clauses, &mut params);

        if !self.sql.is_empty() && !sql.is_empty() {
            self.sql.push(' ');
        }
        self.sql.push_str(&sql);
        self.params = params;

        tracing::trace!(sql = %self.sql, params = self.params.len(), "built statement");
    }

    /// Builds the statement with the processor matching its operation.
    pub fn build_op(&mut self) {
        let callbacks = &self.cx.callbacks;
        let clauses = match self.op {
            Op::Query => callbacks.query.clauses.clone(),
            Op::Create => callbacks.create.clauses.clone(),
            Op::Update => callbacks.update.clauses.clone(),
            Op::Delete => callbacks.delete.clauses.clone(),
        };

        self.build(&clauses);
    }
}
