use super::Expr;

/// Which table a column reference is qualified with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRef {
    /// Qualify with the table of the statement being built, whatever it ends
    /// up being called.
    Current,

    /// Qualify with an explicit table name.
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprColumn {
    /// Optional table qualifier. Unqualified columns render as a bare name.
    pub table: Option<TableRef>,

    /// Column name in the database.
    pub name: String,
}

impl Expr {
    /// A bare column reference.
    pub fn column(name: impl Into<String>) -> Self {
        ExprColumn {
            table: None,
            name: name.into(),
        }
        .into()
    }

    /// A column reference qualified with the current table.
    pub fn current_column(name: impl Into<String>) -> Self {
        ExprColumn {
            table: Some(TableRef::Current),
            name: name.into(),
        }
        .into()
    }

    pub fn as_column(&self) -> Option<&ExprColumn> {
        match self {
            Self::Column(column) => Some(column),
            _ => None,
        }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
