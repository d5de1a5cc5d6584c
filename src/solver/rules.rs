use crate::expression::Operator;

/// Decides whether `x op y` is worth exploring, where `x` and `y` are the
/// totals of two distinct candidates taken in that order.
///
/// Each rule keeps exactly one representative of a family of equivalent
/// combinations. Addition and multiplication only run with `x <= y`.
/// Subtraction only runs when the result stays positive. Multiplying or
/// dividing by one is skipped, and division must be exact.
#[inline]
pub fn is_valid(op: Operator, x: i64, y: i64) -> bool {
    match op {
        Operator::Add => x <= y,
        Operator::Sub => x > y,
        Operator::Mul => x != 1 && y != 1 && x <= y,
        Operator::Div => y > 1 && x % y == 0,
    }
}
