use super::{Field, Model, ModelId};
use crate::{Error, Result};

use std::collections::HashSet;

/// Builds a [`Model`], validating its fields and collecting the statement
/// modifiers contributed by field hooks.
#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    table: Option<String>,
    fields: Vec<Field>,
}

impl ModelBuilder {
    pub(super) fn new(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            name: name.into(),
            table: None,
            fields: vec![],
        }
    }

    /// Sets the table name. Defaults to the model name.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> Result<Model> {
        let table = self.table.unwrap_or_else(|| self.name.clone());

        if self.fields.is_empty() {
            return Err(Error::invalid_schema(format!(
                "model `{}` declares no fields",
                self.name
            )));
        }

        let mut columns = HashSet::new();
        for field in &self.fields {
            if !columns.insert(field.column_name()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate column `{}` in table `{table}`",
                    field.column_name()
                )));
            }
        }

        let primary_key = self
            .fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.primary_key)
            .map(|(index, _)| index)
            .collect();

        let mut model = Model {
            id: ModelId::default(),
            name: self.name,
            table,
            fields: vec![],
            primary_key,
            query_clauses: vec![],
            update_clauses: vec![],
            delete_clauses: vec![],
        };

        for field in &self.fields {
            let Some(hooks) = &field.hooks else {
                continue;
            };

            model
                .query_clauses
                .extend(hooks.query_clauses(field, &self.fields)?);
            model
                .update_clauses
                .extend(hooks.update_clauses(field, &self.fields)?);
            model
                .delete_clauses
                .extend(hooks.delete_clauses(field, &self.fields)?);
        }

        model.fields = self.fields;
        Ok(model)
    }
}
