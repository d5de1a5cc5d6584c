use log::{debug, info, trace, warn};

use crate::expression::{Expr, Operator};
use crate::solver::constants::NUMBER_COUNT;
use crate::solver::fingerprint::{Fingerprint, FingerprintSet};
use crate::solver::rules::is_valid;
use crate::solver::solution::Solution;

/// Depth-first search over every way of combining the source numbers.
///
/// The solver keeps its visited-state set between calls so the allocation
/// can be reused, but clears it at the start of every [`solve`](Self::solve).
/// Independent solves need independent solvers.
#[derive(Debug, Default)]
pub struct ExpressionSolver {
    visited: FingerprintSet,
}

/// Mutable state of one solve, threaded through the recursion
struct SearchContext<'a> {
    goal: i64,
    visited: &'a mut FingerprintSet,
    results: Vec<Expr>,
    combinations: u64,
    overflows: u64,
}

impl ExpressionSolver {
    /// Create a new expression solver
    pub fn new() -> Self {
        Self::default()
    }

    /// Find every expression over `numbers` that evaluates to `goal`.
    ///
    /// Expressions may leave some of the numbers unused. Results come back
    /// ordered by operation count, fewest first. A combination whose value
    /// does not fit in an `i64` is skipped like any other invalid one, so
    /// it never costs an in-range result.
    pub fn solve(&mut self, numbers: [i64; NUMBER_COUNT], goal: i64) -> Solution {
        info!("Searching for {} using {:?}", goal, numbers);

        self.visited.clear();

        let mut candidates: Vec<Expr> = numbers.into_iter().map(Expr::leaf).collect();
        candidates.sort_by_key(Expr::total);

        let mut context = SearchContext {
            goal,
            visited: &mut self.visited,
            results: Vec::new(),
            combinations: 0,
            overflows: 0,
        };
        context.search(&candidates);

        let SearchContext {
            results,
            combinations,
            overflows,
            ..
        } = context;
        if overflows > 0 {
            warn!("Skipped {} combinations that overflow i64", overflows);
        }
        let solution = Solution::ranked(results, combinations, overflows, self.visited.len());

        info!(
            "Found {} results after {} combinations over {} states",
            solution.len(),
            solution.combinations(),
            solution.states_explored()
        );
        solution
    }
}

impl SearchContext<'_> {
    /// Expands `candidates`, which must be sorted by total
    fn search(&mut self, candidates: &[Expr]) {
        let len = candidates.len();
        if len <= 1 {
            return;
        }

        let Some(fingerprint) = Fingerprint::new(candidates) else {
            warn!("Cannot fingerprint {} candidates", len);
            return;
        };
        if !self.visited.insert(fingerprint) {
            trace!("Skipping visited state {:?}", fingerprint.totals());
            return;
        }

        for (i, x) in candidates.iter().enumerate() {
            for (j, y) in candidates.iter().enumerate() {
                if i == j {
                    continue;
                }

                for op in Operator::ALL {
                    if !is_valid(op, x.total(), y.total()) {
                        continue;
                    }

                    self.combinations += 1;
                    let total = match op.apply(x.total(), y.total()) {
                        Ok(total) => total,
                        Err(e) => {
                            debug!("Skipping combination: {}", e);
                            self.overflows += 1;
                            continue;
                        }
                    };
                    if total != self.goal && len == 2 {
                        continue;
                    }

                    let combined = Expr::with_total(op, x.clone(), y.clone(), total);
                    if total == self.goal {
                        debug!("Found {} = {}", combined, total);
                        self.results.push(combined);
                    } else {
                        let rest = reduce(candidates, i, j, combined);
                        self.search(&rest);
                    }
                }
            }
        }
    }
}

/// Replaces `candidates[i]` and `candidates[j]` with `combined`, keeping the
/// sequence sorted. `combined` goes in front of the first remaining
/// candidate whose total is not smaller.
fn reduce(candidates: &[Expr], i: usize, j: usize, combined: Expr) -> Vec<Expr> {
    let mut rest: Vec<Expr> = Vec::with_capacity(candidates.len() - 1);
    rest.extend(
        candidates
            .iter()
            .enumerate()
            .filter(|&(k, _)| k != i && k != j)
            .map(|(_, candidate)| candidate.clone()),
    );

    let position = rest.partition_point(|candidate| candidate.total() < combined.total());
    rest.insert(position, combined);
    rest
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::reduce;
    use crate::expression::{Expr, Operator};

    fn totals(exprs: &[Expr]) -> Vec<i64> {
        exprs.iter().map(Expr::total).collect()
    }

    #[test]
    fn test_reduce_inserts_in_sorted_position() {
        let candidates: Vec<Expr> = [2, 3, 5, 8].into_iter().map(Expr::leaf).collect();
        let combined = Expr::with_total(Operator::Add, Expr::leaf(2), Expr::leaf(3), 5);
        let rest = reduce(&candidates, 0, 1, combined);
        assert_eq!(totals(&rest), vec![5, 5, 8]);
        assert_eq!(rest[0].operations(), 1);
        assert_eq!(rest[1].operations(), 0);
    }

    #[test]
    fn test_reduce_appends_largest_value() {
        let candidates: Vec<Expr> = [2, 3, 5, 8].into_iter().map(Expr::leaf).collect();
        let combined = Expr::with_total(Operator::Mul, Expr::leaf(5), Expr::leaf(8), 40);
        let rest = reduce(&candidates, 3, 2, combined);
        assert_eq!(totals(&rest), vec![2, 3, 40]);
    }
}
