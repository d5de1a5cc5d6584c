use thiserror::Error;

use crate::utils::UtilsError;

/// Errors that reject a puzzle before the search starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid puzzle: {0}")]
    UtilsError(#[from] UtilsError),
}
