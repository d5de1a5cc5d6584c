use crate::utils::{UtilsError, validate_goal, validate_numbers};

#[test]
fn test_validate_numbers_valid() {
    assert_eq!(
        validate_numbers(&[7, 3, 4, 5, 15, 75]),
        Ok([7, 3, 4, 5, 15, 75])
    );
    assert!(validate_numbers(&[1, 1, 1, 1, 1, 1]).is_ok());
}

#[test]
fn test_validate_numbers_wrong_count() {
    assert_eq!(
        validate_numbers(&[1, 2, 3, 4, 5]),
        Err(UtilsError::WrongNumberCount {
            expected: 6,
            found: 5
        })
    );
    assert_eq!(
        validate_numbers(&[1, 2, 3, 4, 5, 6, 7]),
        Err(UtilsError::WrongNumberCount {
            expected: 6,
            found: 7
        })
    );
    assert!(validate_numbers(&[]).is_err());
}

#[test]
fn test_validate_numbers_rejects_non_positive() {
    assert_eq!(
        validate_numbers(&[1, 2, 0, 4, 5, 6]),
        Err(UtilsError::NonPositiveNumber(0))
    );
    assert_eq!(
        validate_numbers(&[1, 2, 3, 4, 5, -6]),
        Err(UtilsError::NonPositiveNumber(-6))
    );
}

#[test]
fn test_validate_goal() {
    assert_eq!(validate_goal(785), Ok(785));
    assert_eq!(validate_goal(0), Err(UtilsError::NonPositiveGoal(0)));
    assert_eq!(validate_goal(-1), Err(UtilsError::NonPositiveGoal(-1)));
}
