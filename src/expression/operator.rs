use std::fmt;

use crate::expression::errors::ExpressionError;

/// The four binary operators the game allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Every operator, in the order the search tries them
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Binding strength used when rendering. `Mul` and `Div` share a level,
    /// `Sub` binds tighter than `Add` so a subtraction under an addition
    /// never needs parentheses.
    pub fn priority(self) -> u8 {
        match self {
            Operator::Add => 1,
            Operator::Sub => 2,
            Operator::Mul | Operator::Div => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Applies the operator to two totals.
    ///
    /// Division truncates toward zero; callers only divide exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::Overflow`] if the result does not fit in an
    /// `i64`, and [`ExpressionError::DivisionByZero`] for a zero divisor.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, ExpressionError> {
        let result = match self {
            Operator::Add => left.checked_add(right),
            Operator::Sub => left.checked_sub(right),
            Operator::Mul => left.checked_mul(right),
            Operator::Div => {
                if right == 0 {
                    return Err(ExpressionError::DivisionByZero { left });
                }
                left.checked_div(right)
            }
        };

        result.ok_or(ExpressionError::Overflow {
            op: self,
            left,
            right,
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
