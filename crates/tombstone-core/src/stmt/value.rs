use super::Type;
use crate::{Error, Result};

use chrono::{DateTime, Utc};

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),

    /// UTC timestamp
    Timestamp(DateTime<Utc>),

    /// A list of values of the same type
    List(Vec<Value>),

    /// A tuple of values, used for composite keys
    Record(Vec<Value>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns `true` for values that do not identify anything: null, `0`,
    /// and the empty string. Records with a zero key are skipped when
    /// collecting identity values.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::I64(v) => *v == 0,
            Self::String(v) => v.is_empty(),
            Self::Record(fields) => fields.iter().all(Value::is_zero),
            _ => false,
        }
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn record_from_vec(fields: Vec<Self>) -> Self {
        Self::Record(fields)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I64(v) => Ok(v),
            value => Err(Error::type_conversion(value, "i64")),
        }
    }

    pub fn to_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }

    pub fn to_option_timestamp(self) -> Result<Option<DateTime<Utc>>> {
        match self {
            Self::Null => Ok(None),
            Self::Timestamp(v) => Ok(Some(v)),
            value => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }

    /// The name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::Null => "Null",
            Self::String(_) => "String",
            Self::Timestamp(_) => "Timestamp",
            Self::List(_) => "List",
            Self::Record(_) => "Record",
        }
    }

    /// Returns `true` if the value can be stored in a column of type `ty`.
    /// Null is accepted by every type.
    pub fn is_a(&self, ty: &Type) -> bool {
        matches!(
            (self, ty),
            (Self::Null, _)
                | (Self::Bool(_), Type::Bool)
                | (Self::I64(_), Type::I64)
                | (Self::String(_), Type::String)
                | (Self::Timestamp(_), Type::Timestamp)
        )
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src as i64)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(src: DateTime<Utc>) -> Self {
        Self::Timestamp(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_bool()
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_i64()
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.to_string()
    }
}
