/// Column types understood by the statement layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I64,
    String,
    Timestamp,
}

impl Type {
    pub fn is_bool(&self) -> bool {
        matches!(self, Type::Bool)
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, Type::Timestamp)
    }
}
