//! Input validation for user-entered measurements
//!
//! This module provides centralized validation for all numeric form inputs.
//! Every function returns `Result<T, String>` where the error string is the
//! exact message rendered next to the offending field.

/// Message shown for any rejected height input.
pub const HEIGHT_ERROR: &str = "Please enter a valid height";

/// Upper sanity bound for weight in either unit system (kg or lb).
const MAX_WEIGHT: f64 = 2000.0;

/// Maximum accepted age in years.
const MAX_AGE: u32 = 130;

/// Validates a canonical height value (inches or centimeters).
///
/// The height is only required to be a positive number; range plausibility
/// is left to the user since the unit system changes what "plausible" means.
///
/// # Errors
///
/// Returns `Err` with "Please enter a valid height" if the input is
/// non-numeric, non-finite, or not strictly positive.
pub fn validate_height(input: &str) -> Result<f64, String> {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(HEIGHT_ERROR.to_string()),
    }
}

/// Validates a weight value (kilograms or pounds).
///
/// # Errors
///
/// Returns `Err` if the input is non-numeric, not strictly positive, or
/// beyond the sanity cap.
pub fn validate_weight(input: &str) -> Result<f64, String> {
    match input.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 && v <= MAX_WEIGHT => Ok(v),
        _ => Err("Please enter a valid weight".to_string()),
    }
}

/// Validates an age in whole years.
///
/// # Errors
///
/// Returns `Err` if the input is not an integer in 1..=130.
pub fn validate_age(input: &str) -> Result<u32, String> {
    match input.trim().parse::<u32>() {
        Ok(v) if (1..=MAX_AGE).contains(&v) => Ok(v),
        _ => Err("Please enter a valid age".to_string()),
    }
}

/// Validates one component of a dual height entry (feet or secondary).
///
/// An empty field counts as zero so the user can fill the fields in either
/// order without transient errors.
///
/// # Errors
///
/// Returns `Err` if the input is non-numeric or negative.
pub fn validate_dual_component(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err("Must be a non-negative number".to_string()),
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_validate_height_sign_boundary(v in -1000.0f64..1000.0) {
            let result = validate_height(&v.to_string());
            if v > 0.0 {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result.unwrap_err(), HEIGHT_ERROR);
            }
        }

        #[test]
        fn test_validate_height_never_panics(input in "\\PC*") {
            let _ = validate_height(&input);
        }

        #[test]
        fn test_validate_dual_component_accepts_all_non_negative(v in 0.0f64..10_000.0) {
            prop_assert_eq!(validate_dual_component(&v.to_string()), Ok(v));
        }

        #[test]
        fn test_validate_age_matches_range(age in 0u32..=300) {
            let result = validate_age(&age.to_string());
            prop_assert_eq!(result.is_ok(), (1..=130).contains(&age));
        }
    }
}
