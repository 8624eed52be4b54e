use super::{Db, Shared};
use crate::Result;

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tombstone_core::{driver::Driver, schema::Model, stmt::BuildContext, Schema};
use tombstone_sql::{Flavor, Serializer};

#[derive(Debug, Default)]
pub struct Builder {
    /// Registered model definitions
    models: Vec<Model>,

    /// Prefix added to every table name
    table_name_prefix: Option<String>,

    /// Clock override for timestamps written while building statements
    now: Option<fn() -> DateTime<Utc>>,

    /// SQL flavor. Inferred from the driver URL when not set.
    flavor: Option<Flavor>,
}

impl Builder {
    pub fn register(&mut self, model: Model) -> &mut Self {
        self.models.push(model);
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Set the clock used for timestamps written by statement modifiers
    pub fn now(&mut self, now: fn() -> DateTime<Utc>) -> &mut Self {
        self.now = Some(now);
        self
    }

    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = Some(flavor);
        self
    }

    pub fn build_schema(&self) -> Result<Schema> {
        let models = self.models.iter().map(|model| match &self.table_name_prefix {
            Some(prefix) => model.with_table_prefix(prefix),
            None => model.clone(),
        });

        Schema::from_models(models)
    }

    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let driver = super::connect::driver(url)?;
        self.build(driver).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let schema = self.build_schema()?;

        let flavor = match self.flavor {
            Some(flavor) => flavor,
            None => super::connect::flavor(&driver.url())?,
        };

        let mut cx = BuildContext::new(Arc::new(Serializer::new(flavor)));
        if let Some(now) = self.now {
            cx.now = now;
        }

        let connection = driver.connect().await?;

        tracing::debug!(url = %driver.url(), ?flavor, models = schema.models().count(), "connected");

        Ok(Db {
            shared: Arc::new(Shared {
                schema,
                cx: Arc::new(cx),
                connection: Mutex::new(connection),
            }),
        })
    }
}
