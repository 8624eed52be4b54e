#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
pub use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod clause;
mod column_def;
mod expr;
mod value;

use tombstone_core::{
    schema::Model,
    stmt::{ClauseName, Dialect, Statement, Value},
};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Statement being serialized. Resolves current-table column references.
    table: &'a str,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// Serializes the listed clauses of `stmt`, in order. Clauses the
    /// statement does not hold are skipped.
    pub fn serialize(
        &self,
        stmt: &Statement,
        clauses: &[ClauseName],
        params: &mut impl Params,
    ) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            table: &stmt.table,
            dst: &mut ret,
            params,
        };

        clause::write_clauses(stmt, clauses, &mut fmt);

        ret
    }

    /// Serializes `CREATE TABLE IF NOT EXISTS` for the model's table.
    pub fn serialize_create_table(&self, model: &Model) -> String {
        let mut ret = String::new();
        let mut params = Vec::<Value>::new();

        let mut fmt = Formatter {
            serializer: self,
            table: &model.table,
            dst: &mut ret,
            params: &mut params,
        };

        column_def::write_create_table(model, &mut fmt);

        assert!(
            params.is_empty(),
            "DDL statements should not have parameters"
        );
        ret
    }
}

impl Dialect for Serializer {
    fn build(&self, stmt: &Statement, clauses: &[ClauseName], params: &mut Vec<Value>) -> String {
        self.serialize(stmt, clauses, params)
    }

    fn create_table(&self, model: &Model) -> String {
        self.serialize_create_table(model)
    }
}
