use thiserror::Error;

/// Errors from validating puzzle input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Expected {expected} source numbers, found {found}")]
    WrongNumberCount { expected: usize, found: usize },
    #[error("Source numbers must be positive: {0}")]
    NonPositiveNumber(i64),
    #[error("Goal must be positive: {0}")]
    NonPositiveGoal(i64),
}
