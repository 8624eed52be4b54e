use tombstone_core::{
    stmt::{Expr, Value},
    Error, Result,
};

/// State of a soft-delete flag column.
///
/// Stored as a plain boolean: `false` for active rows, `true` for deleted
/// rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// The row is visible to default-scoped statements.
    #[default]
    Active,

    /// The row has been soft deleted.
    Deleted,
}

impl Flag {
    pub fn is_deleted(self) -> bool {
        matches!(self, Flag::Deleted)
    }

    pub fn as_bool(self) -> bool {
        self.is_deleted()
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Flag::Deleted
        } else {
            Flag::Active
        }
    }
}

impl From<Flag> for bool {
    fn from(value: Flag) -> Self {
        value.as_bool()
    }
}

impl From<Flag> for Value {
    fn from(value: Flag) -> Self {
        Value::Bool(value.as_bool())
    }
}

impl From<Flag> for Expr {
    fn from(value: Flag) -> Self {
        Expr::Value(value.into())
    }
}

impl TryFrom<Value> for Flag {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(value) => Ok(value.into()),
            value => Err(Error::type_conversion(value, "Flag")),
        }
    }
}
