pub mod constants;
mod batch;
mod core;
mod errors;
mod fingerprint;
mod rules;
mod solution;

pub use self::core::ExpressionSolver;
pub use batch::{Puzzle, solve_batch};
pub use errors::SolverError;
pub use rules::is_valid;
pub use solution::Solution;
