mod builder;
pub use builder::ModelBuilder;

mod field;
pub use field::{DefaultValue, Field};

mod hooks;
pub use hooks::FieldHooks;

mod model;
pub use model::{Model, ModelId};

use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// Every model registered with a database handle, keyed by model name.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    models: IndexMap<String, Arc<Model>>,
}

impl Schema {
    pub fn from_models(models: impl IntoIterator<Item = Model>) -> Result<Schema> {
        let mut schema = Schema::default();

        for mut model in models {
            if schema.models.contains_key(&model.name) {
                return Err(Error::invalid_schema(format!(
                    "model `{}` registered twice",
                    model.name
                )));
            }

            if let Some(other) = schema.models.values().find(|m| m.table == model.table) {
                return Err(Error::invalid_schema(format!(
                    "models `{}` and `{}` both map to table `{}`",
                    other.name, model.name, model.table
                )));
            }

            model.id = ModelId(schema.models.len());
            schema.models.insert(model.name.clone(), Arc::new(model));
        }

        Ok(schema)
    }

    /// Looks up a model by name.
    pub fn model(&self, name: &str) -> Result<&Arc<Model>> {
        self.models
            .get(name)
            .ok_or_else(|| Error::invalid_statement(format!("unknown model `{name}`")))
    }

    pub fn models(&self) -> impl Iterator<Item = &Arc<Model>> + '_ {
        self.models.values()
    }
}
