use super::{Expr, Record, Statement, Value};

/// Records bound to a statement, either as its destination or as its model
/// value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dest {
    /// Nothing bound.
    #[default]
    None,

    /// A single record.
    One(Record),

    /// A batch of records.
    Many(Vec<Record>),
}

impl Dest {
    pub fn is_none(&self) -> bool {
        matches!(self, Dest::None)
    }

    /// Returns `true` when records are bound and can be written back to.
    pub fn is_addressable(&self) -> bool {
        !self.is_none()
    }

    pub fn records(&self) -> &[Record] {
        match self {
            Dest::None => &[],
            Dest::One(record) => std::slice::from_ref(record),
            Dest::Many(records) => records,
        }
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        match self {
            Dest::None => &mut [],
            Dest::One(record) => std::slice::from_mut(record),
            Dest::Many(records) => records,
        }
    }

    /// Identity values of the bound records for the given key columns, with
    /// duplicates and zero keys removed.
    pub fn identity_values(&self, columns: &[&str]) -> Vec<Value> {
        let mut values: Vec<Value> = vec![];

        for value in self.records().iter().filter_map(|r| r.identity(columns)) {
            if !values.contains(&value) {
                values.push(value);
            }
        }

        values
    }
}

impl Statement {
    /// Condition selecting the rows identified by `dest`: `pk IN (...)`, or
    /// `(pk1, pk2) IN ((..), ..)` for composite keys. `None` when the statement
    /// has no model or no record in `dest` carries a non-zero key.
    pub fn key_condition(&self, dest: &Dest) -> Option<Expr> {
        let model = self.schema.as_ref()?;
        let columns = model.primary_key_columns();
        let values = dest.identity_values(&columns);

        if values.is_empty() {
            return None;
        }

        let column = match &columns[..] {
            [column] => Expr::current_column(*column),
            columns => Expr::record(columns.iter().map(|c| Expr::current_column(*c))),
        };

        Some(Expr::in_list(column, Value::list_from_vec(values)))
    }
}

impl From<Record> for Dest {
    fn from(value: Record) -> Self {
        Dest::One(value)
    }
}

impl From<Vec<Record>> for Dest {
    fn from(value: Vec<Record>) -> Self {
        Dest::Many(value)
    }
}
