use super::Value;

/// Rows for an INSERT statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    /// Column names, in the order values appear in each row.
    pub columns: Vec<String>,

    pub rows: Vec<Vec<Value>>,
}

impl Values {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
