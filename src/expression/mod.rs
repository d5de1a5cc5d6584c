//! Expression trees over the source numbers, their evaluation and rendering

mod ast;
mod display;
mod errors;
mod eval;
mod operator;

pub use ast::Expr;
pub use errors::ExpressionError;
pub use operator::Operator;
