mod logging_driver;
pub use logging_driver::{DriverOp, LoggingConnection, LoggingDriver};

pub mod models;

use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Mutex};
use tombstone::{driver::Operation, schema::Model, stmt::Value, Db};
use tombstone_driver_sqlite::Sqlite;

/// Clock used by every test database.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// Installs a fmt subscriber filtered by `RUST_LOG`. Safe to call from every
/// test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A fresh in-memory database with the given models and an operation log.
pub struct Test {
    pub db: Db,
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl Test {
    pub async fn new(models: impl IntoIterator<Item = Model>) -> Test {
        init_tracing();

        let driver = LoggingDriver::new(Sqlite::in_memory());
        let ops_log = driver.ops_log_handle();

        let mut builder = Db::builder();
        for model in models {
            builder.register(model);
        }
        builder.now(fixed_now);

        let db = builder.build(driver).await.unwrap();
        db.push_schema().await.unwrap();

        let test = Test { db, ops_log };
        test.clear_log();
        test
    }

    /// SQL of every operation executed since the log was last cleared.
    pub fn log(&self) -> Vec<String> {
        self.ops().iter().map(|op| op.operation.sql().to_string()).collect()
    }

    pub fn ops(&self) -> Vec<DriverOp> {
        self.ops_log.lock().unwrap().clone()
    }

    pub fn clear_log(&self) {
        self.ops_log.lock().unwrap().clear();
    }

    /// Reads a row straight from the table, bypassing every statement
    /// modifier.
    pub async fn raw_row(&self, table: &str, id: i64) -> Option<Vec<Value>> {
        let response = self
            .db
            .exec(Operation::query(
                format!("SELECT * FROM \"{table}\" WHERE \"id\" = ?1"),
                vec![Value::I64(id)],
                vec![],
            ))
            .await
            .unwrap();

        response.rows.into_values().unwrap().into_iter().next()
    }
}
