use crate::expression::Expr;

/// Ranked results of one solve, with its search telemetry
#[derive(Debug, Clone)]
pub struct Solution {
    expressions: Vec<Expr>,
    combinations: u64,
    overflows: u64,
    states_explored: usize,
}

impl Solution {
    /// Orders the collected matches by operation count. The sort is stable:
    /// matches with equal counts stay in the order the search found them.
    pub(crate) fn ranked(
        mut expressions: Vec<Expr>,
        combinations: u64,
        overflows: u64,
        states_explored: usize,
    ) -> Self {
        expressions.sort_by_key(Expr::operations);
        Self {
            expressions,
            combinations,
            overflows,
            states_explored,
        }
    }

    pub fn expressions(&self) -> &[Expr] {
        &self.expressions
    }

    pub fn into_expressions(self) -> Vec<Expr> {
        self.expressions
    }

    /// The match with the fewest operations, if any
    pub fn best(&self) -> Option<&Expr> {
        self.expressions.first()
    }

    /// At most `n` of the best matches
    pub fn top(&self, n: usize) -> &[Expr] {
        &self.expressions[..n.min(self.expressions.len())]
    }

    /// Every match rendered as infix text, best first
    pub fn rendered(&self) -> Vec<String> {
        self.expressions.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Number of combinations built during the search
    pub fn combinations(&self) -> u64 {
        self.combinations
    }

    /// Combinations dropped because their value does not fit in an `i64`.
    /// These are included in [`combinations`](Self::combinations).
    pub fn overflows(&self) -> u64 {
        self.overflows
    }

    /// Number of distinct candidate multisets expanded
    pub fn states_explored(&self) -> usize {
        self.states_explored
    }
}
