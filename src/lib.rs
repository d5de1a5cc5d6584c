//! Countdown - A library for solving the Countdown numbers game
//!
//! Given six source numbers and a goal, this library finds every arithmetic
//! expression built from `+`, `-`, `*` and exact `/` that reaches the goal,
//! using each source number at most once.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expr, ExpressionError, Operator};
pub use solver::{ExpressionSolver, Puzzle, Solution, SolverError, solve_batch};
pub use utils::{UtilsError, validate_goal, validate_numbers};

/// Find every expression over `numbers` that evaluates to `goal`
///
/// This is a convenience function that validates the input, creates a fresh
/// solver and runs a single search.
///
/// # Arguments
///
/// * `numbers` - Exactly six strictly positive source numbers
/// * `goal` - The strictly positive value to reach
///
/// # Returns
///
/// * `Ok(Solution)` - All matches, fewest operations first, plus search statistics
/// * `Err(SolverError)` - If the input is invalid
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` does not hold exactly six values
/// * A source number or the goal is zero or negative
///
/// # Examples
///
/// ```
/// use countdown::solve;
///
/// match solve(&[1, 1, 4, 7, 15, 50], 522) {
///     Ok(solution) => {
///         for expr in solution.top(3) {
///             println!("{} = 522", expr);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(numbers: &[i64], goal: i64) -> Result<Solution, SolverError> {
    let numbers = validate_numbers(numbers)?;
    let goal = validate_goal(goal)?;

    let mut solver = ExpressionSolver::new();
    Ok(solver.solve(numbers, goal))
}
