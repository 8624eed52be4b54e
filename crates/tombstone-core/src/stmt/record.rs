use super::Value;

use indexmap::IndexMap;

/// A row, as an ordered map from column name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Record {
        Record::default()
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// Returns the value for `column`, or null when the column is absent.
    pub fn value(&self, column: &str) -> Value {
        self.fields.get(column).cloned().unwrap_or_default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Collects the values of `columns` as one identity. Returns `None` when
    /// every component is zero.
    pub fn identity(&self, columns: &[&str]) -> Option<Value> {
        let value = match columns {
            [] => return None,
            [column] => self.value(column),
            columns => Value::Record(columns.iter().map(|c| self.value(c)).collect()),
        };

        (!value.is_zero()).then_some(value)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Builds a [`Record`] from `column => value` pairs.
#[macro_export]
macro_rules! record {
    () => {
        $crate::stmt::Record::new()
    };
    ( $( $column:expr => $value:expr ),+ $(,)? ) => {{
        let mut record = $crate::stmt::Record::new();
        $( record.insert($column, $value); )+
        record
    }};
}
