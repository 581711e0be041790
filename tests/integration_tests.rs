//! Integration tests for Vitals
//!
//! These tests drive the public core API end-to-end: dual-field entry
//! through canonical height normalization into derived body metrics,
//! including the unit-system conversions a real session goes through.

use vitals::core::height::{self, UnitSystem};
use vitals::core::metrics::{ActivityLevel, BmiCategory, BodyMetrics, CM_PER_INCH, KG_PER_POUND, Sex};
use vitals::validators;

/// Runs dual-field entry through the same pipeline the form uses:
/// component validation, recombination, canonical validation.
fn enter_dual_height(feet: &str, secondary: &str, units: UnitSystem) -> Result<String, String> {
    let feet = validators::validate_dual_component(feet)?;
    let secondary = validators::validate_dual_component(secondary)?;
    let canonical =
        height::from_dual(feet, secondary, units).map_err(|e| e.user_message().to_string())?;
    validators::validate_height(&canonical)?;
    Ok(canonical)
}

#[test]
fn test_imperial_dual_entry_to_bmi() {
    let canonical = enter_dual_height("5", "10", UnitSystem::Imperial).unwrap();
    assert_eq!(canonical, "70");

    let height_cm = canonical.parse::<f64>().unwrap() * CM_PER_INCH;
    let weight_kg = 154.0 * KG_PER_POUND;
    let metrics = BodyMetrics::compute(Sex::Male, ActivityLevel::Moderate, weight_kg, height_cm, 30)
        .expect("valid profile");

    assert_eq!(metrics.category, BmiCategory::Normal);
    assert!((metrics.bmi - 22.1).abs() < 0.1);
    assert_eq!(metrics.meal_plan.total(), metrics.daily_calories.round() as u32);
}

#[test]
fn test_metric_dual_entry_rounds_to_whole_centimeters() {
    // 5 ft + 15 leftover cm -> round(5 * 30.48 + 15) = 167 cm
    let canonical = enter_dual_height("5", "15", UnitSystem::Metric).unwrap();
    assert_eq!(canonical, "167");

    let dual = height::to_dual(&canonical, UnitSystem::Metric);
    assert_eq!(dual.feet, 5.0);
    assert_eq!(dual.secondary, 15.0);
}

#[test]
fn test_zero_height_is_rejected_at_the_validation_step() {
    let err = enter_dual_height("0", "0", UnitSystem::Imperial).unwrap_err();
    assert_eq!(err, "Please enter a valid height");
}

#[test]
fn test_negative_component_is_rejected_before_recombination() {
    let err = enter_dual_height("-1", "10", UnitSystem::Imperial).unwrap_err();
    assert_eq!(err, "Must be a non-negative number");
}

#[test]
fn test_empty_components_count_as_zero() {
    // Partial entry: only the secondary field filled in
    let canonical = enter_dual_height("", "30", UnitSystem::Metric).unwrap();
    assert_eq!(canonical, "30");
}

#[test]
fn test_unit_switch_preserves_physical_height() {
    // The form converts the canonical value when the unit system changes
    let metric = 178.0_f64;
    let imperial = (metric / CM_PER_INCH).round();
    assert_eq!(imperial, 70.0);
    let back = (imperial * CM_PER_INCH).round();
    assert_eq!(back, metric);
}

#[test]
fn test_metric_second_round_trip_may_lose_sub_unit_precision() {
    // Documented behavior: a fractional canonical value is normalized to
    // whole centimeters on its first pass through dual mode, then stays
    // stable on every later pass.
    let dual = height::to_dual("167.4", UnitSystem::Metric);
    let first = height::from_dual(dual.feet, dual.secondary, UnitSystem::Metric).unwrap();
    assert_eq!(first, "167");

    let dual = height::to_dual(&first, UnitSystem::Metric);
    let second = height::from_dual(dual.feet, dual.secondary, UnitSystem::Metric).unwrap();
    assert_eq!(second, "167");
}

#[test]
fn test_full_metric_profile_end_to_end() {
    let height = validators::validate_height("175").unwrap();
    let weight = validators::validate_weight("70").unwrap();
    let age = validators::validate_age("30").unwrap();

    let metrics = BodyMetrics::compute(Sex::Male, ActivityLevel::Moderate, weight, height, age)
        .expect("valid profile");

    assert_eq!(metrics.bmr, 1648.75);
    assert_eq!(metrics.daily_calories, 1648.75 * 1.55);
    assert_eq!(metrics.category, BmiCategory::Normal);

    // Meal plan parts always reassemble the daily target exactly
    let plan = metrics.meal_plan;
    assert_eq!(
        plan.breakfast + plan.lunch + plan.dinner + plan.snacks,
        metrics.daily_calories.round() as u32
    );
}

#[test]
fn test_error_type_carries_field_and_message() {
    let err = height::from_dual(f64::NAN, 0.0, UnitSystem::Metric).unwrap_err();
    match &err {
        vitals::Error::Validation { field, .. } => assert_eq!(field, "height"),
    }
    assert!(err.to_string().starts_with("Validation error in height"));
}
