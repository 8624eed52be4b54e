use crate::SoftDelete;

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use tombstone_core::{
    schema::{Field, Model},
    stmt::{BuildContext, Clause, Dest, Filter, Op, Select, Statement, Type},
};
use tombstone_sql::Serializer;

pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn cx() -> Arc<BuildContext> {
    let mut cx = BuildContext::new(Arc::new(Serializer::sqlite()));
    cx.now = fixed_now;
    Arc::new(cx)
}

fn id() -> Field {
    Field::new("id", Type::I64).primary_key()
}

pub(crate) fn users() -> Model {
    Model::builder("User")
        .table("users")
        .field(id())
        .field(Field::new("name", Type::String))
        .field(
            Field::new("deleted", Type::Bool)
                .default_value(false)
                .hooks(SoftDelete::new()),
        )
        .build()
        .unwrap()
}

pub(crate) fn archived_users() -> Model {
    Model::builder("User")
        .table("users")
        .field(id())
        .field(
            Field::new("deleted", Type::Bool)
                .default_value(false)
                .hooks(SoftDelete::new().companion("deleted_at")),
        )
        .field(Field::new("deleted_at", Type::Timestamp).default_null())
        .build()
        .unwrap()
}

pub(crate) fn flagged_users() -> Model {
    Model::builder("User")
        .table("users")
        .field(id())
        .field(
            Field::new("deleted", Type::Bool)
                .default_value(false)
                .hooks(SoftDelete::new().companion("hidden")),
        )
        .field(Field::new("hidden", Type::Bool).default_value(false))
        .build()
        .unwrap()
}

pub(crate) fn notes() -> Model {
    Model::builder("Note")
        .table("notes")
        .field(id())
        .field(Field::new("title", Type::String))
        .field(
            Field::new("archived", Type::Bool)
                .default_null()
                .hooks(SoftDelete::new()),
        )
        .build()
        .unwrap()
}

pub(crate) fn memberships() -> Model {
    Model::builder("Membership")
        .table("memberships")
        .field(Field::new("org", Type::I64).primary_key())
        .field(Field::new("user", Type::I64).primary_key())
        .field(
            Field::new("deleted", Type::Bool)
                .default_value(false)
                .hooks(SoftDelete::new()),
        )
        .build()
        .unwrap()
}

pub(crate) fn statement(model: &Model, op: Op) -> Statement {
    Statement::for_model(op, Arc::new(model.clone()), cx())
}

/// A default-scoped SELECT with the model's query modifiers applied.
pub(crate) fn query(model: &Model, filter: impl Into<Filter>) -> Statement {
    let mut stmt = statement(model, Op::Query);
    stmt.add_clause(Select::star());
    stmt.add_clause(filter.into());

    for modifier in &model.query_clauses {
        stmt.add_modifier(modifier.clone());
    }

    stmt
}

/// A DELETE bound to `dest` with the model's delete modifiers applied.
pub(crate) fn delete(model: &Model, dest: impl Into<Dest>) -> Statement {
    let mut stmt = statement(model, Op::Delete);
    stmt.add_clause(Clause::Delete);
    stmt.add_clause(Clause::From);
    stmt.dest = dest.into();
    stmt.model = stmt.dest.clone();

    for modifier in &model.delete_clauses {
        stmt.add_modifier(modifier.clone());
    }

    stmt
}
