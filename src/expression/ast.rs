use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

/// A node in an expression tree built from the source numbers.
///
/// Trees are immutable once built: every `Apply` node stores the total of
/// its children, computed once when the node is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Leaf(i64),
    Apply {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
        total: i64,
    },
}

impl Expr {
    pub fn leaf(value: i64) -> Self {
        Expr::Leaf(value)
    }

    /// Builds `left op right`, taking ownership of both operands.
    ///
    /// # Errors
    ///
    /// Propagates the arithmetic error from [`Operator::apply`].
    pub fn combine(op: Operator, left: Expr, right: Expr) -> Result<Self, ExpressionError> {
        let total = op.apply(left.total(), right.total())?;
        Ok(Self::with_total(op, left, right, total))
    }

    /// Builds `left op right` around a total the caller already computed
    /// with [`Operator::apply`]
    pub(crate) fn with_total(op: Operator, left: Expr, right: Expr, total: i64) -> Self {
        Expr::Apply {
            op,
            left: Box::new(left),
            right: Box::new(right),
            total,
        }
    }

    /// The value this expression evaluates to
    pub fn total(&self) -> i64 {
        match self {
            Expr::Leaf(value) => *value,
            Expr::Apply { total, .. } => *total,
        }
    }

    /// Number of binary operators in the tree
    pub fn operations(&self) -> usize {
        match self {
            Expr::Leaf(_) => 0,
            Expr::Apply { left, right, .. } => 1 + left.operations() + right.operations(),
        }
    }

    /// Source values used by this expression, left to right
    pub fn leaves(&self) -> Vec<i64> {
        fn collect(expr: &Expr, out: &mut Vec<i64>) {
            match expr {
                Expr::Leaf(value) => out.push(*value),
                Expr::Apply { left, right, .. } => {
                    collect(left, out);
                    collect(right, out);
                }
            }
        }

        let mut out = Vec::with_capacity(self.operations() + 1);
        collect(self, &mut out);
        out
    }
}
