use log::{debug, warn};

use crate::solver::constants::NUMBER_COUNT;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error unless `numbers` holds exactly [`NUMBER_COUNT`] strictly
/// positive values.
pub fn validate_numbers(numbers: &[i64]) -> Result<[i64; NUMBER_COUNT], UtilsError> {
    debug!("Validating source numbers: {:?}", numbers);

    let checked: [i64; NUMBER_COUNT] = numbers.try_into().map_err(|_| {
        warn!(
            "Expected {} source numbers, got {}",
            NUMBER_COUNT,
            numbers.len()
        );
        UtilsError::WrongNumberCount {
            expected: NUMBER_COUNT,
            found: numbers.len(),
        }
    })?;

    if let Some(&bad) = checked.iter().find(|&&n| n <= 0) {
        warn!("Source number is not positive: {}", bad);
        return Err(UtilsError::NonPositiveNumber(bad));
    }

    debug!("Source number validation successful");
    Ok(checked)
}

/// # Errors
///
/// Returns an error if the goal is zero or negative.
pub fn validate_goal(goal: i64) -> Result<i64, UtilsError> {
    if goal <= 0 {
        warn!("Goal is not positive: {}", goal);
        return Err(UtilsError::NonPositiveGoal(goal));
    }
    Ok(goal)
}
