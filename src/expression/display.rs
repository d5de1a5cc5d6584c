use std::fmt;

use crate::expression::ast::Expr;
use crate::expression::operator::Operator;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn needs_parens(parent: Operator, op: Operator, side: Side) -> bool {
            parent.priority() > op.priority()
                // `a - (b - c)` keeps its parentheses
                || (parent == op && op == Operator::Sub)
                // so do `a / (b * c)` and `a / (b / c)`
                || (parent == Operator::Div && side == Side::Right && op.priority() == 3)
        }

        fn fmt_expression(
            f: &mut fmt::Formatter,
            expr: &Expr,
            parent: Operator,
            side: Side,
        ) -> fmt::Result {
            match expr {
                Expr::Leaf(value) => write!(f, "{}", value),
                Expr::Apply {
                    op, left, right, ..
                } => {
                    let parens = needs_parens(parent, *op, side);
                    if parens {
                        write!(f, "(")?;
                    }
                    fmt_expression(f, left, *op, Side::Left)?;
                    write!(f, " {} ", op)?;
                    fmt_expression(f, right, *op, Side::Right)?;
                    if parens {
                        write!(f, ")")?;
                    }
                    Ok(())
                }
            }
        }

        // The top level renders as if it were the left operand of an addition.
        fmt_expression(f, self, Operator::Add, Side::Left)
    }
}
