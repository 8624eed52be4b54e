mod assignments;
pub use assignments::{Assignment, Assignments};

mod callbacks;
pub use callbacks::{Callbacks, Processor};

mod clause;
pub use clause::{Clause, ClauseName, Clauses};

mod context;
pub use context::{BuildContext, Dialect};

mod dest;
pub use dest::Dest;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::{ExprColumn, TableRef};

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_record;
pub use expr_record::ExprRecord;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Values;

mod limit;
pub use limit::Limit;

mod modifier;
pub use modifier::StatementModifier;

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by;
pub use order_by::{Direction, OrderBy, OrderByExpr};

mod record;
pub use record::Record;

mod select;
pub use select::{Returning, Select};

mod statement;
pub use statement::{Op, Statement};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
