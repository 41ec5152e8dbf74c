//! Error types for the calculation engine

use thiserror::Error;

/// Errors raised by a single calculation call
///
/// Every error is local to the call that produced it; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Division by zero: {context}")]
    DivisionByZero { context: &'static str },
}

impl CalcError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Reject NaN and infinite inputs before they reach a formula
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid(field, format!("must be finite, got {}", value)))
    }
}
