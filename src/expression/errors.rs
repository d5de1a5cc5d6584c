use thiserror::Error;

use crate::expression::operator::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Arithmetic overflow computing {left} {op} {right}")]
    Overflow { op: Operator, left: i64, right: i64 },
    #[error("Division by zero: {left} / 0")]
    DivisionByZero { left: i64 },
}
