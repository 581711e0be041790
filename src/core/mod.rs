//! Core calculator logic
//!
//! - [`height`] - Unit-aware height normalization between canonical and
//!   split-field representations
//! - [`metrics`] - Derived body metrics (BMI, BMR, calories, meal plan)
//! - [`error`] - Error types

pub mod error;
pub mod height;
pub mod metrics;
