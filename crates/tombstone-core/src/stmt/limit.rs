#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limit {
    /// Maximum number of rows to return
    pub limit: Option<u64>,

    /// Rows to skip before returning
    pub offset: Option<u64>,
}
