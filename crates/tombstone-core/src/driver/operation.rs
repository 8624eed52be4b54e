use crate::stmt::{Type, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// A statement returning rows
    Query(QuerySql),

    /// A statement returning the number of affected rows
    Execute(ExecSql),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuerySql {
    pub sql: String,
    pub params: Vec<Value>,

    /// Types of the returned columns, in order
    pub ret: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExecSql {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Operation {
    pub fn query(sql: impl Into<String>, params: Vec<Value>, ret: Vec<Type>) -> Operation {
        Operation::Query(QuerySql {
            sql: sql.into(),
            params,
            ret,
        })
    }

    pub fn execute(sql: impl Into<String>, params: Vec<Value>) -> Operation {
        Operation::Execute(ExecSql {
            sql: sql.into(),
            params,
        })
    }

    pub fn sql(&self) -> &str {
        match self {
            Operation::Query(op) => &op.sql,
            Operation::Execute(op) => &op.sql,
        }
    }

    pub fn params(&self) -> &[Value] {
        match self {
            Operation::Query(op) => &op.params,
            Operation::Execute(op) => &op.params,
        }
    }
}
