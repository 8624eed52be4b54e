pub mod db;
pub use db::Db;

mod scope;
pub use scope::Scope;

pub use tombstone_core::{driver, err, record, schema, stmt, Error, Result};

pub use tombstone_sql::Flavor;
