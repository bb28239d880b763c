//! Nutrition calculation engine
//!
//! Pure, validated calculators for clinical nutrition assessment:
//! energy expenditure, body composition, and daily intake targets.

pub mod calc;
pub mod error;
pub mod models;
