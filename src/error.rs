//! Engine error types
//!
//! Shared error and result types for all calculators.

use thiserror::Error;

/// Calculation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A parameter is outside its documented domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Macro percentages do not sum to 100
    #[error("Macro percentages sum to {0}, expected 100")]
    InconsistentMacroSplit(f64),
}

impl CalcError {
    /// Shorthand for an `InvalidInput` error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CalcError::InvalidInput(msg.into())
    }
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
