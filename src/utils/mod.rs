//! Input validation for the callers of the solver

mod errors;
mod validation;

pub use errors::UtilsError;
pub use validation::{validate_goal, validate_numbers};

#[cfg(test)]
mod tests;
