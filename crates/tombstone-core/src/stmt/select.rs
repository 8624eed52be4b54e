/// The projection of a SELECT statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub returning: Returning,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Returning {
    /// Every column of the table, in declaration order
    Star,

    /// Explicit column list
    Columns(Vec<String>),

    /// `COUNT(*)`
    Count,
}

impl Select {
    pub fn star() -> Select {
        Select {
            returning: Returning::Star,
        }
    }

    pub fn columns(columns: impl IntoIterator<Item = impl Into<String>>) -> Select {
        Select {
            returning: Returning::Columns(columns.into_iter().map(Into::into).collect()),
        }
    }

    pub fn count() -> Select {
        Select {
            returning: Returning::Count,
        }
    }
}
