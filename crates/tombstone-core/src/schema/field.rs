use super::FieldHooks;
use crate::stmt::{Type, Value};

use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Field {
    /// The field name
    pub name: String,

    /// Column the field is stored in, when it differs from the field name
    pub column: Option<String>,

    /// Column type
    pub ty: Type,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// True if the column accepts null
    pub nullable: bool,

    /// Declared default
    pub default: DefaultValue,

    /// Statement hooks contributed by the field's type
    pub hooks: Option<Arc<dyn FieldHooks>>,
}

/// The default a field declares for its column.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DefaultValue {
    /// No default declared
    #[default]
    None,

    /// The column defaults to null
    Null,

    /// The column defaults to a constant
    Value(Value),
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Field {
        Field {
            name: name.into(),
            column: None,
            ty,
            primary_key: false,
            nullable: false,
            default: DefaultValue::None,
            hooks: None,
        }
    }

    /// Stores the field in a column with a different name.
    pub fn column(mut self, column: impl Into<String>) -> Field {
        self.column = Some(column.into());
        self
    }

    pub fn primary_key(mut self) -> Field {
        self.primary_key = true;
        self
    }

    pub fn nullable(mut self) -> Field {
        self.nullable = true;
        self
    }

    /// Declares null as the column default. Implies `nullable`.
    pub fn default_null(mut self) -> Field {
        self.nullable = true;
        self.default = DefaultValue::Null;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Field {
        self.default = DefaultValue::Value(value.into());
        self
    }

    pub fn hooks(mut self, hooks: impl FieldHooks + 'static) -> Field {
        self.hooks = Some(Arc::new(hooks));
        self
    }

    /// Gets the column name.
    pub fn column_name(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.name)
    }

    /// Returns `true` if the declared default is null.
    pub fn defaults_to_null(&self) -> bool {
        matches!(self.default, DefaultValue::Null)
    }
}
