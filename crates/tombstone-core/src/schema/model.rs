use super::{Field, ModelBuilder};
use crate::stmt::StatementModifier;

use std::{fmt, sync::Arc};

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: String,

    /// Table the model is stored in
    pub table: String,

    /// Fields contained by the model
    pub fields: Vec<Field>,

    /// Indices into `fields` of the primary key fields
    pub primary_key: Vec<usize>,

    /// Modifiers run before every query against the model
    pub query_clauses: Vec<Arc<dyn StatementModifier>>,

    /// Modifiers run before every update against the model
    pub update_clauses: Vec<Arc<dyn StatementModifier>>,

    /// Modifiers run before every delete against the model
    pub delete_clauses: Vec<Arc<dyn StatementModifier>>,
}

#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ModelId(pub usize);

impl Model {
    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder::new(name)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_by_column(&self, column: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.column_name() == column)
    }

    pub fn primary_key_fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.primary_key.iter().map(|index| &self.fields[*index])
    }

    pub fn primary_key_columns(&self) -> Vec<&str> {
        self.primary_key_fields().map(Field::column_name).collect()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(Field::column_name)
    }

    /// Returns a copy of the model stored in `prefix` + its table name.
    pub fn with_table_prefix(&self, prefix: &str) -> Model {
        let mut model = self.clone();
        model.table = format!("{prefix}{}", self.table);
        model
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
