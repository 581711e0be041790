//! Height entry form state and validation
//!
//! The canonical height string is the single authoritative representation;
//! the dual feet/secondary fields are transient UI state re-derived from it
//! whenever the mode, unit system, or value changes from outside.

use crate::core::height::{self, InputMode, UnitSystem};
use crate::validators;

/// Form validation errors for individual fields
#[derive(Debug, Clone, Default)]
pub struct FormErrors {
    pub weight: Option<String>,
    pub age: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.weight.is_none() && self.age.is_none()
    }
}

/// Height entry state with validation
///
/// `value` is the canonical height (inches or centimeters per the active
/// unit system). `feet_input`/`secondary_input` are only meaningful while
/// `input_mode` is `Dual` and are discarded when the mode is left.
#[derive(Debug, Clone, Default)]
pub struct HeightForm {
    pub value: String,
    pub input_mode: InputMode,
    pub feet_input: String,
    pub secondary_input: String,
    pub error: Option<String>,
}

impl HeightForm {
    /// Switches the input mode.
    ///
    /// Clears any stored validation error and re-derives the dual fields
    /// from the canonical value; the canonical value itself is untouched.
    pub fn switch_mode(&mut self, mode: InputMode, unit_system: UnitSystem) {
        self.error = None;
        self.input_mode = mode;
        if mode == InputMode::Dual {
            self.sync_dual_fields(unit_system);
        }
    }

    /// Recomputes the dual display fields from the canonical value.
    pub fn sync_dual_fields(&mut self, unit_system: UnitSystem) {
        let dual = height::to_dual(&self.value, unit_system);
        self.feet_input = height::format_height(dual.feet);
        self.secondary_input = height::format_height(dual.secondary);
    }

    /// Accepts a keystroke in the single combined field.
    pub fn apply_single_input(&mut self, input: String) {
        self.value = input;
        self.error = validators::validate_height(&self.value).err();
    }

    /// Recombines the dual fields into the canonical value.
    ///
    /// Invalid components leave the previous canonical value in place and
    /// surface an inline error instead.
    pub fn apply_dual_input(&mut self, unit_system: UnitSystem) {
        let feet = validators::validate_dual_component(&self.feet_input);
        let secondary = validators::validate_dual_component(&self.secondary_input);

        match (feet, secondary) {
            (Ok(f), Ok(s)) => match height::from_dual(f, s, unit_system) {
                Ok(canonical) => {
                    self.value = canonical;
                    self.error = validators::validate_height(&self.value).err();
                }
                Err(e) => self.error = Some(e.user_message().to_string()),
            },
            (Err(msg), _) | (_, Err(msg)) => self.error = Some(msg),
        }
    }

    /// The canonical value as a number, if it currently validates.
    pub fn validated_value(&self) -> Option<f64> {
        validators::validate_height(&self.value).ok()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
