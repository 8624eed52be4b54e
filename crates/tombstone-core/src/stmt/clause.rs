use super::{Assignments, Filter, Limit, OrderBy, Select, StatementModifier, Values};

use indexmap::IndexMap;
use std::{fmt, sync::Arc};

/// Clauses of a statement being built, keyed by name.
pub type Clauses = IndexMap<ClauseName, Clause>;

/// Identifies a clause within a statement.
///
/// The callback processors list clause names in the order their SQL is
/// emitted; a statement is built by rendering each listed clause it holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClauseName {
    Select,
    Insert,
    Values,
    Update,
    Set,
    Delete,
    From,
    Where,
    OrderBy,
    Limit,

    /// A clause registered by an extension under its own name.
    Named(String),
}

#[derive(Debug, Clone)]
pub enum Clause {
    /// `SELECT <returning>`
    Select(Select),

    /// `INSERT INTO <table>`
    Insert,

    /// `(<columns>) VALUES (...), (...)`
    Values(Values),

    /// `UPDATE <table>`
    Update,

    /// `SET <column> = <expr>, ...`
    Set(Assignments),

    /// `DELETE`
    Delete,

    /// `FROM <table>`
    From,

    /// `WHERE <conditions>`
    Where(Filter),

    /// `ORDER BY ...`
    OrderBy(OrderBy),

    /// `LIMIT ... OFFSET ...`
    Limit(Limit),

    /// Renders nothing. Only its presence in the clause set matters.
    Marker,

    /// A clause contributed by a [`StatementModifier`].
    Custom(Arc<dyn StatementModifier>),
}

impl ClauseName {
    pub fn named(name: impl Into<String>) -> ClauseName {
        ClauseName::Named(name.into())
    }
}

impl fmt::Display for ClauseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClauseName::Select => "SELECT",
            ClauseName::Insert => "INSERT",
            ClauseName::Values => "VALUES",
            ClauseName::Update => "UPDATE",
            ClauseName::Set => "SET",
            ClauseName::Delete => "DELETE",
            ClauseName::From => "FROM",
            ClauseName::Where => "WHERE",
            ClauseName::OrderBy => "ORDER BY",
            ClauseName::Limit => "LIMIT",
            ClauseName::Named(name) => name,
        })
    }
}

impl Clause {
    /// Name under which the clause is stored. Markers and custom clauses have
    /// no intrinsic name and must be inserted with an explicit one.
    pub fn name(&self) -> Option<ClauseName> {
        Some(match self {
            Clause::Select(_) => ClauseName::Select,
            Clause::Insert => ClauseName::Insert,
            Clause::Values(_) => ClauseName::Values,
            Clause::Update => ClauseName::Update,
            Clause::Set(_) => ClauseName::Set,
            Clause::Delete => ClauseName::Delete,
            Clause::From => ClauseName::From,
            Clause::Where(_) => ClauseName::Where,
            Clause::OrderBy(_) => ClauseName::OrderBy,
            Clause::Limit(_) => ClauseName::Limit,
            Clause::Marker | Clause::Custom(_) => return None,
        })
    }

    /// Merges `other` into `self`. WHERE conditions and ORDER BY terms
    /// accumulate, every other clause is replaced.
    pub fn merge(&mut self, other: Clause) {
        match (self, other) {
            (Clause::Where(filter), Clause::Where(other)) => filter.add_filter(other),
            (Clause::OrderBy(order_by), Clause::OrderBy(other)) => {
                order_by.exprs.extend(other.exprs)
            }
            (clause, other) => *clause = other,
        }
    }

    pub fn as_where(&self) -> Option<&Filter> {
        match self {
            Clause::Where(filter) => Some(filter),
            _ => None,
        }
    }
}

impl From<Filter> for Clause {
    fn from(value: Filter) -> Self {
        Clause::Where(value)
    }
}

impl From<Assignments> for Clause {
    fn from(value: Assignments) -> Self {
        Clause::Set(value)
    }
}

impl From<Select> for Clause {
    fn from(value: Select) -> Self {
        Clause::Select(value)
    }
}

impl From<Values> for Clause {
    fn from(value: Values) -> Self {
        Clause::Values(value)
    }
}

impl From<OrderBy> for Clause {
    fn from(value: OrderBy) -> Self {
        Clause::OrderBy(value)
    }
}

impl From<Limit> for Clause {
    fn from(value: Limit) -> Self {
        Clause::Limit(value)
    }
}
