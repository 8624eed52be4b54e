use super::{value::Literal, Comma, Flavor, Formatter, Ident, Params, ToSql};

use tombstone_core::{
    schema::{DefaultValue, Field, Model},
    stmt::Type,
};

pub(super) fn write_create_table<P: Params>(model: &Model, f: &mut Formatter<'_, P>) {
    let name = Ident(&model.table);
    let columns = Comma(model.fields.iter().map(ColumnDef));

    fmt!(f, "CREATE TABLE IF NOT EXISTS " name " (" columns);

    let pk = model.primary_key_columns();
    if !pk.is_empty() {
        fmt!(f, ", PRIMARY KEY (" Comma(pk.into_iter().map(Ident)) ")");
    }

    fmt!(f, ")");
}

struct ColumnDef<'a>(&'a Field);

impl ToSql for ColumnDef<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let field = self.0;

        fmt!(f, Ident(field.column_name()) " " field.ty);

        if !field.nullable {
            fmt!(f, " NOT NULL");
        }

        match &field.default {
            DefaultValue::None => {}
            DefaultValue::Null => fmt!(f, " DEFAULT NULL"),
            DefaultValue::Value(value) => fmt!(f, " DEFAULT " Literal(value)),
        }
    }
}

impl ToSql for Type {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let ty = match (self, f.serializer.flavor) {
            (Type::Bool, _) => "BOOLEAN",
            (Type::I64, Flavor::Sqlite) => "INTEGER",
            (Type::I64, _) => "BIGINT",
            (Type::String, Flavor::Mysql) => "VARCHAR(255)",
            (Type::String, _) => "TEXT",
            (Type::Timestamp, Flavor::Sqlite) => "TEXT",
            (Type::Timestamp, Flavor::Postgresql) => "TIMESTAMPTZ",
            (Type::Timestamp, Flavor::Mysql) => "DATETIME(6)",
        };

        f.dst.push_str(ty);
    }
}
