use super::{Callbacks, ClauseName, Statement, Value};
use crate::schema::Model;

use chrono::{DateTime, Utc};
use std::{fmt, sync::Arc};

/// Generates SQL text for statements.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Renders the listed clauses of `stmt`, pushing bound parameters onto
    /// `params`. Placeholders are numbered after the parameters already in
    /// `params`.
    fn build(&self, stmt: &Statement, clauses: &[ClauseName], params: &mut Vec<Value>) -> String;

    /// DDL creating the table for `model` when it does not exist yet.
    fn create_table(&self, model: &Model) -> String;
}

/// State shared by every statement built through the same database handle.
#[derive(Debug, Clone)]
pub struct BuildContext {
    pub dialect: Arc<dyn Dialect>,

    pub callbacks: Callbacks,

    /// Clock used for timestamps written by statement modifiers.
    pub now: fn() -> DateTime<Utc>,
}

impl BuildContext {
    pub fn new(dialect: Arc<dyn Dialect>) -> BuildContext {
        BuildContext {
            dialect,
            callbacks: Callbacks::default(),
            now: Utc::now,
        }
    }
}
