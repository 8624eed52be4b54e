//! Models shared by the integration tests.

use tombstone::{
    schema::{Field, Model},
    stmt::Type,
};
use tombstone_soft_delete::SoftDelete;

fn id() -> Field {
    Field::new("id", Type::I64).primary_key()
}

/// Soft deleted through `deleted`, stamping `deleted_at`.
pub fn user() -> Model {
    Model::builder("User")
        .table("users")
        .field(id())
        .field(Field::new("name", Type::String))
        .field(
            Field::new("deleted", Type::Bool)
                .default_value(false)
                .hooks(SoftDelete::new().companion("deleted_at")),
        )
        .field(Field::new("deleted_at", Type::Timestamp).default_null())
        .build()
        .unwrap()
}

/// Soft deleted through a boolean column named `deleted_at`.
pub fn item() -> Model {
    Model::builder("Item")
        .table("items")
        .field(id())
        .field(Field::new("name", Type::String).default_value(""))
        .field(
            Field::new("deleted_at", Type::Bool)
                .default_value(false)
                .hooks(SoftDelete::new()),
        )
        .build()
        .unwrap()
}

/// Uses null as the active-row sentinel.
pub fn note() -> Model {
    Model::builder("Note")
        .table("notes")
        .field(id())
        .field(Field::new("title", Type::String))
        .field(
            Field::new("archived", Type::Bool)
                .default_null()
                .hooks(SoftDelete::new()),
        )
        .build()
        .unwrap()
}

/// No soft delete.
pub fn tag() -> Model {
    Model::builder("Tag")
        .table("tags")
        .field(id())
        .field(Field::new("label", Type::String))
        .build()
        .unwrap()
}
