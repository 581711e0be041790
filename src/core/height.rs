//! Height normalization between canonical values and split-field entry
//!
//! The canonical height is a string-encoded decimal owned by the enclosing
//! form: inches under imperial units, centimeters under metric. Dual entry
//! splits it into whole feet plus a secondary unit (inches or centimeters).
//!
//! Metric dual mode is deliberately "feet + leftover centimeters" to mirror
//! the imperial scheme. Converting it to meters+centimeters would change the
//! canonical-value contract, so it stays as-is.

use crate::core::error::{Error, Result};

/// Measurement convention selected by the user.
///
/// `Copy` trait allows efficient passing by value for this small enum.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum UnitSystem {
    #[default]
    #[strum(serialize = "Metric")]
    Metric,
    #[strum(serialize = "Imperial")]
    Imperial,
}

impl UnitSystem {
    /// Secondary units per foot: 12 inches or 30.48 centimeters.
    ///
    /// Both constants are exact by definition (1 ft = 0.3048 m).
    pub const fn unit_factor(self) -> f64 {
        match self {
            UnitSystem::Metric => 30.48,
            UnitSystem::Imperial => 12.0,
        }
    }

    /// Label of the canonical (and dual secondary) unit.
    pub const fn unit_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }

    /// Label of the weight unit that accompanies this system.
    pub const fn weight_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lb",
        }
    }
}

/// Which height representation the user is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// One combined field holding the canonical value directly
    #[default]
    Single,
    /// Split entry: whole feet plus a secondary unit
    Dual,
}

/// Split height entry: whole feet plus leftover secondary units.
///
/// Invariant: `feet * unit_factor + secondary` reproduces the canonical
/// value (metric canonical values are whole centimeters).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DualRepresentation {
    pub feet: f64,
    pub secondary: f64,
}

/// Splits a canonical height into feet plus leftover secondary units.
///
/// feet = floor(value / factor), secondary = round(value mod factor).
/// Non-numeric, non-finite, or negative input is treated as zero; callers
/// pre-filter through validation before displaying errors.
pub fn to_dual(value: &str, unit_system: UnitSystem) -> DualRepresentation {
    let parsed = value.trim().parse::<f64>().unwrap_or(0.0);
    let v = if parsed.is_finite() && parsed > 0.0 {
        parsed
    } else {
        0.0
    };

    let factor = unit_system.unit_factor();
    DualRepresentation {
        feet: (v / factor).floor(),
        secondary: (v % factor).round(),
    }
}

/// Recombines split fields into the canonical height string.
///
/// Metric totals are rounded to the nearest whole centimeter; inches add
/// without rounding loss and keep any fractional part the user entered.
///
/// # Errors
///
/// Returns a validation error if either component is negative or
/// non-numeric (NaN).
pub fn from_dual(feet: f64, secondary: f64, unit_system: UnitSystem) -> Result<String> {
    if feet.is_nan() || secondary.is_nan() {
        return Err(Error::validation(
            "height",
            "Height components must be numbers",
        ));
    }
    if feet < 0.0 || secondary < 0.0 {
        return Err(Error::validation(
            "height",
            "Height components must not be negative",
        ));
    }

    let total = feet * unit_system.unit_factor() + secondary;
    let canonical = match unit_system {
        UnitSystem::Metric => total.round(),
        UnitSystem::Imperial => total,
    };
    Ok(format_height(canonical))
}

/// Formats a canonical height without a trailing `.0` on whole values.
pub fn format_height(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imperial_dual_to_canonical() {
        // 5 ft 10 in = 70 in
        let canonical = from_dual(5.0, 10.0, UnitSystem::Imperial).unwrap();
        assert_eq!(canonical, "70");
    }

    #[test]
    fn test_imperial_canonical_to_dual() {
        let dual = to_dual("70", UnitSystem::Imperial);
        assert_eq!(dual, DualRepresentation { feet: 5.0, secondary: 10.0 });
    }

    #[test]
    fn test_metric_dual_to_canonical_rounds_whole_cm() {
        // 5 ft 15 cm = round(152.4 + 15) = 167 cm
        let canonical = from_dual(5.0, 15.0, UnitSystem::Metric).unwrap();
        assert_eq!(canonical, "167");
    }

    #[test]
    fn test_metric_canonical_to_dual() {
        let dual = to_dual("167", UnitSystem::Metric);
        assert_eq!(dual.feet, 5.0);
        assert_eq!(dual.secondary, 15.0);
    }

    #[test]
    fn test_imperial_keeps_fractional_inches() {
        let canonical = from_dual(5.0, 10.5, UnitSystem::Imperial).unwrap();
        assert_eq!(canonical, "70.5");
    }

    #[test]
    fn test_to_dual_treats_garbage_as_zero() {
        assert_eq!(to_dual("", UnitSystem::Imperial), DualRepresentation::default());
        assert_eq!(to_dual("abc", UnitSystem::Metric), DualRepresentation::default());
        assert_eq!(to_dual("-12", UnitSystem::Imperial), DualRepresentation::default());
        assert_eq!(to_dual("NaN", UnitSystem::Metric), DualRepresentation::default());
    }

    #[test]
    fn test_from_dual_rejects_negative_components() {
        assert!(from_dual(-1.0, 5.0, UnitSystem::Imperial).is_err());
        assert!(from_dual(5.0, -0.5, UnitSystem::Metric).is_err());
    }

    #[test]
    fn test_from_dual_rejects_nan_components() {
        let err = from_dual(f64::NAN, 5.0, UnitSystem::Imperial).unwrap_err();
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn test_from_dual_zero_is_allowed_here() {
        // 0 ft 0 in is representable; rejecting it is the validator's job
        assert_eq!(from_dual(0.0, 0.0, UnitSystem::Imperial).unwrap(), "0");
    }

    #[test]
    fn test_unit_factors_are_exact() {
        assert_eq!(UnitSystem::Imperial.unit_factor(), 12.0);
        assert_eq!(UnitSystem::Metric.unit_factor(), 30.48);
    }

    #[test]
    fn test_format_height_trims_whole_values() {
        assert_eq!(format_height(70.0), "70");
        assert_eq!(format_height(70.5), "70.5");
        assert_eq!(format_height(0.0), "0");
    }

    #[test]
    fn test_unit_system_parses_case_insensitively() {
        assert_eq!("metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!("Imperial".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert!("furlongs".parse::<UnitSystem>().is_err());
    }
}
