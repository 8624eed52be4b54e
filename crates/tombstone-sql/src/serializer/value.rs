use super::{Comma, Formatter, Params, ToSql};

use tombstone_core::stmt;

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use stmt::Value::*;

        match self {
            Record(fields) => {
                fmt!(f, "(" Comma(fields) ")");
            }
            List(values) => {
                fmt!(f, "(" Comma(values) ")");
            }
            value => {
                let placeholder = f.params.push(value);
                fmt!(f, placeholder)
            }
        }
    }
}

/// A value written inline, for DDL where parameters are not allowed.
pub(super) struct Literal<'a>(pub(super) &'a stmt::Value);

impl ToSql for Literal<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;
        use stmt::Value::*;

        match self.0 {
            Null => f.dst.push_str("NULL"),
            Bool(true) => f.dst.push_str("TRUE"),
            Bool(false) => f.dst.push_str("FALSE"),
            I64(v) => write!(f.dst, "{v}").unwrap(),
            String(v) => {
                f.dst.push('\'');
                f.dst.push_str(&v.replace('\'', "''"));
                f.dst.push('\'');
            }
            Timestamp(v) => {
                write!(f.dst, "'{}'", v.to_rfc3339()).unwrap();
            }
            value => todo!("literal value={value:#?}"),
        }
    }
}
