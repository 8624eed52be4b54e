use super::Error;

/// Error when an UPDATE or DELETE would touch every row of a table.
///
/// Statements must carry at least one condition unless global updates were
/// explicitly allowed on the statement.
#[derive(Debug)]
pub(super) struct MissingWhereClause;

impl std::error::Error for MissingWhereClause {}

impl core::fmt::Display for MissingWhereClause {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("missing WHERE clause")
    }
}

impl Error {
    /// Creates a missing WHERE clause error.
    pub fn missing_where_clause() -> Error {
        Error::from(super::ErrorKind::MissingWhereClause(MissingWhereClause))
    }

    /// Returns `true` if this error is a missing WHERE clause error.
    pub fn is_missing_where_clause(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingWhereClause(_))
    }
}
