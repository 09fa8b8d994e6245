use thiserror::Error;

use crate::condition::Operator;
use crate::dialects::DatabaseKind;
use crate::fields::SqlFunction;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuilderError {
    #[error("operator {operator:?} is not supported by the {kind} dialect")]
    UnsupportedOperator {
        kind: DatabaseKind,
        operator: Operator,
    },

    #[error("function {function:?} is not supported by the {kind} dialect")]
    UnsupportedFunction {
        kind: DatabaseKind,
        function: SqlFunction,
    },

    #[error("no dialect registered for {0}")]
    UnknownDialect(DatabaseKind),

    #[error("invalid operand for {operator:?}: {reason}")]
    InvalidOperand { operator: Operator, reason: String },
}
