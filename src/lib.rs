//! Vitals - desktop health & fitness calculator
//!
//! A graphical calculator for body metrics with unit-aware height entry.
//!
//! # Architecture
//!
//! - [`core`] - Height normalization and derived body metrics
//! - [`validators`] - Input validation for user-entered measurements
//!
//! # Height handling
//!
//! The canonical height is a single string-encoded decimal (inches under
//! imperial units, centimeters under metric). The UI may present it as one
//! combined field or as split feet-plus-secondary entry; both map onto the
//! canonical value through [`core::height`] and are validated before being
//! accepted.

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

pub mod core;
pub mod validators;

// Re-export commonly used types
pub use crate::core::error::{Error, Result};
pub use crate::core::height::{DualRepresentation, InputMode, UnitSystem};
pub use crate::core::metrics::{ActivityLevel, BmiCategory, BodyMetrics, MealPlan, Sex};
