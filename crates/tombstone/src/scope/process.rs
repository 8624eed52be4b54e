//! Statement processors.
//!
//! Each processor runs the model's statement modifiers for its operation, then
//! adds whatever clauses are still missing and builds the SQL. A modifier that
//! already built the statement (like a soft delete rewriting a DELETE) takes
//! precedence over the processor's own clauses.

use crate::Result;

use std::sync::Arc;
use tombstone_core::{
    schema::Model,
    stmt::{Assignments, Clause, ClauseName, Record, Select, Statement, Value, Values},
    Error,
};

pub(super) fn query(mut stmt: Statement, count: bool) -> Result<Statement> {
    let model = schema(&stmt)?;

    for modifier in &model.query_clauses {
        stmt.add_modifier(modifier.clone());
    }

    if !stmt.is_built() {
        if count {
            stmt.add_clause_if_not_exists(Select::count());
        } else {
            stmt.add_clause_if_not_exists(Select::columns(model.columns()));
        }
        stmt.add_clause_if_not_exists(Clause::From);
        stmt.build_op();
    }

    finish(stmt)
}

pub(super) fn create(mut stmt: Statement, record: &Record) -> Result<Statement> {
    let model = schema(&stmt)?;

    for (column, value) in record.iter() {
        check_value(&model, column, value)?;
    }

    stmt.add_clause(Clause::Insert);
    stmt.add_clause(Values {
        columns: record.columns().map(str::to_string).collect(),
        rows: vec![record.iter().map(|(_, value)| value.clone()).collect()],
    });
    stmt.build_op();

    finish(stmt)
}

pub(super) fn update(mut stmt: Statement, values: Record) -> Result<Statement> {
    let model = schema(&stmt)?;

    let mut set = Assignments::with_capacity(values.len());
    for (column, value) in values.iter() {
        check_value(&model, column, value)?;
        set.set(column, value.clone());
    }

    if set.is_empty() {
        return Err(Error::invalid_statement(format!(
            "update of `{}` assigns no columns",
            model.name
        )));
    }

    let had_conditions = stmt.has_conditions();
    let key = stmt.key_condition(&stmt.model);

    for modifier in &model.update_clauses {
        stmt.add_modifier(modifier.clone());
    }

    if !stmt.is_built() {
        stmt.add_clause_if_not_exists(Clause::Update);

        // Columns set by modifiers come first, explicit values win
        if let Some(Clause::Set(existing)) = stmt.clause(&ClauseName::Set) {
            set.prepend(existing.clone());
        }
        stmt.add_clause(set);

        for (column, value) in values.iter() {
            stmt.set_column(column, value.clone());
        }

        let keyed = key.is_some();
        if let Some(key) = key {
            stmt.and_filter(key);
        }

        check_where(&mut stmt, had_conditions || keyed);

        if stmt.error().is_none() {
            stmt.build_op();
        }
    }

    finish(stmt)
}

pub(super) fn delete(mut stmt: Statement) -> Result<Statement> {
    let model = schema(&stmt)?;

    for modifier in &model.delete_clauses {
        stmt.add_modifier(modifier.clone());
    }

    if stmt.error().is_none() && !stmt.is_built() {
        let had_conditions = stmt.has_conditions();
        let mut keyed = false;

        stmt.add_clause_if_not_exists(Clause::Delete);
        stmt.add_clause_if_not_exists(Clause::From);

        if let Some(key) = stmt.key_condition(&stmt.dest) {
            stmt.and_filter(key);
            keyed = true;
        }

        if stmt.dest.is_addressable() && !stmt.model.is_none() && stmt.dest != stmt.model {
            if let Some(key) = stmt.key_condition(&stmt.model) {
                stmt.and_filter(key);
                keyed = true;
            }
        }

        check_where(&mut stmt, had_conditions || keyed);

        if stmt.error().is_none() {
            tracing::debug!(table = %stmt.table, "hard delete");
            stmt.build_op();
        }
    }

    finish(stmt)
}

fn schema(stmt: &Statement) -> Result<Arc<Model>> {
    stmt.schema
        .clone()
        .ok_or_else(|| Error::invalid_statement(format!("no model bound to `{}`", stmt.table)))
}

fn check_where(stmt: &mut Statement, scoped: bool) {
    if !scoped && !stmt.allow_global_update {
        stmt.add_error(Error::missing_where_clause());
    }
}

/// Checks that `column` belongs to `model` and can hold `value`.
fn check_value(model: &Model, column: &str, value: &Value) -> Result<()> {
    let Some(field) = model.field_by_column(column) else {
        return Err(Error::invalid_statement(format!(
            "model `{}` has no column `{column}`",
            model.name
        )));
    };

    if !value.is_a(&field.ty) {
        return Err(Error::invalid_statement(format!(
            "column `{column}` of `{}` is {:?}, got {}",
            model.name,
            field.ty,
            value.kind_name()
        )));
    }

    Ok(())
}

fn finish(mut stmt: Statement) -> Result<Statement> {
    match stmt.take_error() {
        Some(err) => {
            tracing::debug!(table = %stmt.table, op = ?stmt.op, %err, "statement rejected");
            Err(err)
        }
        None => Ok(stmt),
    }
}
