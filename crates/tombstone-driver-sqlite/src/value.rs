use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use tombstone_core::{
    stmt::{self, Value as CoreValue},
    Error, Result,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a core value. Without a type
    /// hint the value is decoded by its storage class.
    pub fn from_sql(row: &Row, index: usize, ty: Option<&stmt::Type>) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver_operation_failed)?;

        let core_value = match value {
            SqlValue::Null => stmt::Value::Null,
            SqlValue::Integer(value) => match ty {
                Some(stmt::Type::Bool) => stmt::Value::Bool(value != 0),
                Some(stmt::Type::I64) | None => stmt::Value::I64(value),
                Some(ty) => {
                    return Err(Error::type_conversion(stmt::Value::I64(value), type_name(ty)))
                }
            },
            SqlValue::Text(value) => match ty {
                Some(stmt::Type::Timestamp) => {
                    let timestamp = DateTime::parse_from_rfc3339(&value)
                        .map_err(Error::driver_operation_failed)?;
                    stmt::Value::Timestamp(timestamp.with_timezone(&Utc))
                }
                _ => stmt::Value::String(value),
            },
            SqlValue::Real(value) => {
                return Err(Error::driver_operation_failed(UnsupportedValue(format!(
                    "REAL column value {value}"
                ))))
            }
            SqlValue::Blob(_) => {
                return Err(Error::driver_operation_failed(UnsupportedValue(
                    "BLOB column value".to_string(),
                )))
            }
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Timestamp(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            Value::List(_) | Value::Record(_) => Err(rusqlite::Error::ToSqlConversionFailure(
                Box::new(UnsupportedValue(format!(
                    "{} cannot be bound as a parameter",
                    self.0.kind_name()
                ))),
            )),
        }
    }
}

fn type_name(ty: &stmt::Type) -> &'static str {
    match ty {
        stmt::Type::Bool => "Bool",
        stmt::Type::I64 => "I64",
        stmt::Type::String => "String",
        stmt::Type::Timestamp => "Timestamp",
    }
}

#[derive(Debug)]
struct UnsupportedValue(String);

impl std::error::Error for UnsupportedValue {}

impl std::fmt::Display for UnsupportedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported value: {}", self.0)
    }
}
