mod builder;
pub use builder::Builder;

mod connect;

use crate::Scope;

use std::sync::Arc;
use tokio::sync::Mutex;
use tombstone_core::{
    driver::{Connection, Operation, Response},
    stmt::{BuildContext, Statement},
    err, Error, Result, Schema,
};

/// Shared state between all `Db` clones.
pub(crate) struct Shared {
    pub(crate) schema: Schema,
    pub(crate) cx: Arc<BuildContext>,
    connection: Mutex<Box<dyn Connection>>,
}

/// A database handle.
///
/// Cloning is cheap; every clone shares the same connection, which executes
/// one statement at a time.
#[derive(Clone)]
pub struct Db {
    pub(crate) shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Schema {
        &self.shared.schema
    }

    /// Creates the table of every registered model that does not exist yet.
    pub async fn push_schema(&self) -> Result<()> {
        for model in self.shared.schema.models() {
            let sql = self.shared.cx.dialect.create_table(model);
            tracing::debug!(model = %model.name, %sql, "creating table");
            self.exec(Operation::execute(sql, vec![]))
                .await
                .map_err(|e| e.context(err!("creating table `{}`", model.table)))?;
        }

        Ok(())
    }

    /// Starts a default-scoped statement chain against the named model.
    pub fn model(&self, name: &str) -> Result<Scope> {
        let model = self.shared.schema.model(name)?.clone();
        Ok(Scope::new(self.clone(), model))
    }

    /// Executes a raw operation on the connection.
    pub async fn exec(&self, op: Operation) -> Result<Response> {
        let mut connection = self.shared.connection.lock().await;
        connection.exec(op).await
    }

    /// Executes a built statement, returning the number of affected rows.
    pub(crate) async fn exec_statement(&self, mut stmt: Statement) -> Result<u64> {
        if let Some(err) = stmt.take_error() {
            return Err(err);
        }

        if !stmt.is_built() {
            return Err(Error::invalid_statement(format!(
                "statement against `{}` produced no SQL",
                stmt.table
            )));
        }

        let response = self.exec(Operation::execute(stmt.sql, stmt.params)).await?;
        response.rows.into_count()
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("schema", &self.shared.schema)
            .field("dialect", &self.shared.cx.dialect)
            .finish()
    }
}
