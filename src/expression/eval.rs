use log::debug;

use crate::expression::ast::Expr;
use crate::expression::errors::ExpressionError;

impl Expr {
    /// Recomputes the value of the tree from its leaves, ignoring the
    /// totals cached in `Apply` nodes.
    ///
    /// # Errors
    ///
    /// Returns an error when an intermediate value overflows `i64` or a
    /// division by zero is attempted.
    pub fn evaluate(&self) -> Result<i64, ExpressionError> {
        let result = match self {
            Expr::Leaf(value) => Ok(*value),
            Expr::Apply {
                op, left, right, ..
            } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                op.apply(left, right)
            }
        };

        if let Err(e) = &result {
            debug!("Expression evaluation failed: {}", e);
        }

        result
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use crate::expression::{Expr, ExpressionError, Operator};

    #[test]
    fn test_evaluate_ignores_cached_total() {
        let expr = Expr::Apply {
            op: Operator::Add,
            left: Box::new(Expr::leaf(2)),
            right: Box::new(Expr::leaf(3)),
            total: 99,
        };
        assert_eq!(expr.total(), 99);
        assert_eq!(expr.evaluate(), Ok(5));
    }

    #[test]
    fn test_evaluate_reports_division_by_zero() {
        let expr = Expr::Apply {
            op: Operator::Div,
            left: Box::new(Expr::leaf(7)),
            right: Box::new(Expr::leaf(0)),
            total: 0,
        };
        assert_eq!(
            expr.evaluate(),
            Err(ExpressionError::DivisionByZero { left: 7 })
        );
    }
}
