use super::{expr::Conditions, Comma, Formatter, Ident, Params, ToSql};

use tombstone_core::stmt::{self, Clause, ClauseName, Returning, Statement};

pub(super) fn write_clauses<P: Params>(
    stmt: &Statement,
    clauses: &[ClauseName],
    f: &mut Formatter<'_, P>,
) {
    let mut first = true;

    for name in clauses {
        let Some(clause) = stmt.clause(name) else {
            continue;
        };

        if let Clause::Where(filter) = clause {
            if filter.is_empty() {
                continue;
            }
        }

        let len = f.dst.len();
        if !first {
            f.dst.push(' ');
        }

        write_clause(stmt, clause, f);

        // Marker clauses and custom clauses may render nothing
        if f.dst.len() == len + usize::from(!first) {
            f.dst.truncate(len);
        } else {
            first = false;
        }
    }
}

fn write_clause<P: Params>(stmt: &Statement, clause: &Clause, f: &mut Formatter<'_, P>) {
    let table = Ident(&stmt.table);

    match clause {
        Clause::Select(select) => match &select.returning {
            Returning::Star => fmt!(f, "SELECT *"),
            Returning::Columns(columns) => {
                let table = f.table;
                fmt!(f, "SELECT " Comma(columns.iter().map(|c| Column(table, c))))
            }
            Returning::Count => fmt!(f, "SELECT COUNT(*)"),
        },
        Clause::Insert => fmt!(f, "INSERT INTO " table),
        Clause::Values(values) => {
            let columns = Comma(values.columns.iter().map(Ident));
            let rows = Comma(values.rows.iter().map(|row| Row(row)));
            fmt!(f, "(" columns ") VALUES " rows)
        }
        Clause::Update => fmt!(f, "UPDATE " table),
        Clause::Set(assignments) => {
            let assignments = Comma(
                assignments
                    .iter()
                    .map(|(column, assignment)| Assignment(column, &assignment.expr)),
            );
            fmt!(f, "SET " assignments)
        }
        Clause::Delete => fmt!(f, "DELETE"),
        Clause::From => fmt!(f, "FROM " table),
        Clause::Where(filter) => fmt!(f, "WHERE " Conditions(&filter.exprs)),
        Clause::OrderBy(order_by) => {
            fmt!(f, "ORDER BY " Comma(&order_by.exprs))
        }
        Clause::Limit(limit) => write_limit(limit, f),
        Clause::Marker => {}
        Clause::Custom(modifier) => modifier.build(stmt, f.dst),
    }
}

fn write_limit<P: Params>(limit: &stmt::Limit, f: &mut Formatter<'_, P>) {
    match (limit.limit, limit.offset) {
        (None, None) => {}
        (Some(limit), None) => fmt!(f, "LIMIT " limit),
        (Some(limit), Some(offset)) => fmt!(f, "LIMIT " limit " OFFSET " offset),
        // SQLite and MySQL only accept OFFSET after a LIMIT
        (None, Some(offset)) if f.serializer.is_sqlite() => fmt!(f, "LIMIT -1 OFFSET " offset),
        (None, Some(offset)) if f.serializer.is_mysql() => {
            fmt!(f, "LIMIT " u64::MAX " OFFSET " offset)
        }
        (None, Some(offset)) => fmt!(f, "OFFSET " offset),
    }
}

/// A column qualified with a table name.
struct Column<'a>(&'a str, &'a str);

impl ToSql for Column<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(self.0) "." Ident(self.1));
    }
}

/// One row of an INSERT statement.
struct Row<'a>(&'a [stmt::Value]);

impl ToSql for Row<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "(" Comma(self.0) ")");
    }
}

/// `<column> = <expr>` inside SET.
struct Assignment<'a>(&'a str, &'a stmt::Expr);

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, Ident(self.0) " = " self.1);
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, &self.expr);

        match self.order {
            Some(stmt::Direction::Asc) => fmt!(f, " ASC"),
            Some(stmt::Direction::Desc) => fmt!(f, " DESC"),
            None => {}
        }
    }
}
