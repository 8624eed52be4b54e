use super::{Delimited, Formatter, Ident, Params, ToSql};

use tombstone_core::stmt::{self, Expr, TableRef};

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(expr) => Conditions(&expr.operands).to_sql(f),
            BinaryOp(expr) => match (&*expr.rhs, expr.op) {
                (rhs, stmt::BinaryOp::Eq) if rhs.is_value_null() => {
                    fmt!(f, expr.lhs " IS NULL")
                }
                (rhs, stmt::BinaryOp::Ne) if rhs.is_value_null() => {
                    fmt!(f, expr.lhs " IS NOT NULL")
                }
                _ => {
                    assert!(!expr.lhs.is_value_null());
                    assert!(!expr.rhs.is_value_null());

                    fmt!(f, expr.lhs " " expr.op " " expr.rhs);
                }
            },
            Column(expr_column) => match &expr_column.table {
                None => fmt!(f, Ident(&expr_column.name)),
                Some(TableRef::Current) => {
                    let table = f.table;
                    fmt!(f, Ident(table) "." Ident(&expr_column.name))
                }
                Some(TableRef::Named(table)) => {
                    fmt!(f, Ident(table) "." Ident(&expr_column.name))
                }
            },
            InList(expr) => {
                fmt!(f, expr.expr " IN " expr.list);
            }
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, expr.expr " IS NOT NULL");
                } else {
                    fmt!(f, expr.expr " IS NULL");
                }
            }
            Not(expr) => {
                fmt!(f, "NOT " Term(&expr.expr));
            }
            Or(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Term), " OR "));
            }
            Record(expr) => {
                fmt!(f, "(" Delimited(&expr.fields, ", ") ")");
            }
            Value(value) => value.to_sql(f),
        }
    }
}

impl ToSql for &Box<Expr> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        (**self).to_sql(f)
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
            stmt::BinaryOp::Ne => "<>",
        })
    }
}

impl ToSql for stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        (&self).to_sql(f)
    }
}

/// A list of conditions joined with `AND`, except or-chained terms which are
/// joined with `OR`.
pub(super) struct Conditions<'a>(pub(super) &'a [Expr]);

impl ToSql for Conditions<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        for (i, expr) in self.0.iter().enumerate() {
            if i > 0 {
                let joiner = if expr.is_or_chained() { " OR " } else { " AND " };
                fmt!(f, joiner);
            }

            fmt!(f, Term(expr));
        }
    }
}

/// An expression used as an operand of AND / OR. Groups of more than one
/// condition are parenthesized so they keep their precedence.
pub(super) struct Term<'a>(pub(super) &'a Expr);

impl ToSql for Term<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self.0 {
            Expr::And(expr) if expr.operands.len() > 1 => {
                fmt!(f, "(" Conditions(&expr.operands) ")")
            }
            Expr::And(expr) => Conditions(&expr.operands).to_sql(f),
            Expr::Or(expr) if expr.operands.len() > 1 => fmt!(f, "(" self.0 ")"),
            Expr::Or(expr) => {
                for operand in &expr.operands {
                    Term(operand).to_sql(f);
                }
            }
            expr => expr.to_sql(f),
        }
    }
}
