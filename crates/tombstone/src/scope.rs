mod process;

use crate::{Db, Error, Result};

use std::sync::Arc;
use tombstone_core::{
    schema::Model,
    stmt::{Direction, Dest, Expr, Filter, Limit, Op, OrderBy, OrderByExpr, Record, Statement},
};

/// A statement chain against one model.
///
/// Conditions, ordering and bindings accumulate on the scope; a terminal
/// (`all`, `first`, `count`, `create`, `update`, `delete`) builds the
/// statement, runs the model's statement modifiers, and executes it. The
/// `to_sql_*` variants stop after building.
#[derive(Debug, Clone)]
pub struct Scope {
    db: Db,
    model: Arc<Model>,
    filter: Filter,
    order_by: OrderBy,
    limit: Limit,
    unscoped: bool,
    allow_global_update: bool,
    dest: Dest,
    model_value: Dest,
}

impl Scope {
    pub(crate) fn new(db: Db, model: Arc<Model>) -> Scope {
        Scope {
            db,
            model,
            filter: Filter::default(),
            order_by: OrderBy::default(),
            limit: Limit::default(),
            unscoped: false,
            allow_global_update: false,
            dest: Dest::None,
            model_value: Dest::None,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// ANDs `expr` with the conditions added so far.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Scope {
        self.filter.add_filter(expr.into());
        self
    }

    /// ORs `expr` with the conditions added so far.
    pub fn or_filter(mut self, expr: impl Into<Expr>) -> Scope {
        self.filter.add_filter(Expr::or_chained(expr));
        self
    }

    pub fn order_by(mut self, column: &str, direction: Direction) -> Scope {
        self.order_by.exprs.push(OrderByExpr {
            expr: Expr::current_column(column),
            order: Some(direction),
        });
        self
    }

    pub fn limit(mut self, limit: u64) -> Scope {
        self.limit.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Scope {
        self.limit.offset = Some(offset);
        self
    }

    /// Disables statement modifiers, so soft-deleted rows are visible and
    /// deletes remove rows.
    pub fn unscoped(mut self) -> Scope {
        self.unscoped = true;
        self
    }

    /// Allows UPDATE and DELETE statements without any condition.
    pub fn allow_global_update(mut self) -> Scope {
        self.allow_global_update = true;
        self
    }

    /// Binds the records the statement reads into or writes from.
    pub fn dest(mut self, dest: impl Into<Dest>) -> Scope {
        self.dest = dest.into();
        self
    }

    /// Binds the model value the statement was started from, when it differs
    /// from the destination.
    pub fn model_value(mut self, model_value: impl Into<Dest>) -> Scope {
        self.model_value = model_value.into();
        self
    }

    /// Returns every matching record.
    pub async fn all(self) -> Result<Vec<Record>> {
        let stmt = self.to_sql_query()?;
        self.db.query_records(stmt, &self.model).await
    }

    /// Returns the first matching record, if any.
    pub async fn first(self) -> Result<Option<Record>> {
        let scope = self.limit(1);
        let stmt = scope.to_sql_query()?;
        let mut records = scope.db.query_records(stmt, &scope.model).await?;

        Ok(if records.is_empty() {
            None
        } else {
            Some(records.swap_remove(0))
        })
    }

    /// Returns the first matching record, failing when there is none.
    pub async fn get(self) -> Result<Record> {
        let table = self.model.table.clone();

        self.first()
            .await?
            .ok_or_else(|| Error::record_not_found(format!("table={table}")))
    }

    /// Returns the number of matching records.
    pub async fn count(self) -> Result<u64> {
        let stmt = self.to_sql_count()?;
        self.db.query_count(stmt).await
    }

    /// Inserts `record`, returning it with the values it was stored with.
    pub async fn create(self, record: Record) -> Result<Record> {
        let stmt = self.to_sql_create(&record)?;
        self.db.exec_statement(stmt).await?;
        Ok(record)
    }

    /// Updates the matching records with `values`, returning the number of
    /// affected rows.
    pub async fn update(self, values: Record) -> Result<u64> {
        let stmt = self.to_sql_update(values)?;
        self.db.exec_statement(stmt).await
    }

    /// Deletes the matching records, returning the number of affected rows.
    pub async fn delete(self) -> Result<u64> {
        let stmt = self.to_sql_delete()?;
        self.db.exec_statement(stmt).await
    }

    pub fn to_sql_query(&self) -> Result<Statement> {
        process::query(self.statement(Op::Query), false)
    }

    pub fn to_sql_count(&self) -> Result<Statement> {
        process::query(self.statement(Op::Query), true)
    }

    pub fn to_sql_create(&self, record: &Record) -> Result<Statement> {
        process::create(self.statement(Op::Create), record)
    }

    pub fn to_sql_update(&self, values: Record) -> Result<Statement> {
        process::update(self.statement(Op::Update), values)
    }

    pub fn to_sql_delete(&self) -> Result<Statement> {
        process::delete(self.statement(Op::Delete))
    }

    /// Starts a statement carrying the scope's clauses and bindings.
    fn statement(&self, op: Op) -> Statement {
        let mut stmt = Statement::for_model(op, self.model.clone(), self.db.shared.cx.clone());

        if !self.filter.is_empty() {
            stmt.add_clause(self.filter.clone());
        }

        if !self.order_by.exprs.is_empty() {
            stmt.add_clause(self.order_by.clone());
        }

        if self.limit != Limit::default() {
            stmt.add_clause(self.limit);
        }

        stmt.unscoped = self.unscoped;
        stmt.allow_global_update = self.allow_global_update;

        // A missing model value defaults to the destination and vice versa
        stmt.dest = self.dest.clone();
        stmt.model = self.model_value.clone();
        if stmt.model.is_none() {
            stmt.model = stmt.dest.clone();
        } else if stmt.dest.is_none() {
            stmt.dest = stmt.model.clone();
        }

        stmt
    }
}

impl Db {
    async fn query_records(&self, stmt: Statement, model: &Model) -> Result<Vec<Record>> {
        let columns = model.columns().map(str::to_string).collect::<Vec<_>>();
        let ret = model.fields.iter().map(|field| field.ty).collect();

        let response = self
            .exec(tombstone_core::driver::Operation::query(
                stmt.sql, stmt.params, ret,
            ))
            .await?;

        Ok(response
            .rows
            .into_values()?
            .into_iter()
            .map(|row| columns.iter().cloned().zip(row).collect())
            .collect())
    }

    async fn query_count(&self, stmt: Statement) -> Result<u64> {
        let response = self
            .exec(tombstone_core::driver::Operation::query(
                stmt.sql,
                stmt.params,
                vec![tombstone_core::stmt::Type::I64],
            ))
            .await?;

        let rows = response.rows.into_values()?;
        let count = rows
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .unwrap_or_default()
            .to_i64()?;

        Ok(count as u64)
    }
}
