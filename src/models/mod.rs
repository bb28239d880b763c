//! Shared value types
//!
//! Input records and enums consumed by the calculators.

pub mod activity;
pub mod subject;

pub use activity::{ActivityLevel, Climate};
pub use subject::{AnthropometricInput, Sex};
