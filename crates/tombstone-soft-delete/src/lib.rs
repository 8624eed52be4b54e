//! Soft delete for Tombstone models.
//!
//! Attaching [`SoftDelete`] to a boolean field turns deletes against the model
//! into updates that set the field to [`Flag::Deleted`]. Queries, updates, and
//! deletes skip rows already flagged unless the statement is unscoped.
//!
//! ```
//! use tombstone_core::{schema::{Field, Model}, stmt::Type};
//! use tombstone_soft_delete::SoftDelete;
//!
//! let model = Model::builder("User")
//!     .table("users")
//!     .field(Field::new("id", Type::I64).primary_key())
//!     .field(Field::new("deleted", Type::Bool).default_value(false).hooks(SoftDelete::new()))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(model.query_clauses.len(), 1);
//! assert_eq!(model.delete_clauses.len(), 1);
//! ```

mod delete;
pub use delete::DeleteClause;

mod flag;
pub use flag::Flag;

mod query;
pub use query::QueryClause;

mod strategy;
pub use strategy::SoftDelete;

mod update;
pub use update::UpdateClause;

/// Name of the marker clause recording that the soft-delete filter has been
/// applied to a statement.
pub const ENABLED_MARKER: &str = "soft_delete_enabled";

#[cfg(test)]
mod test_util;
