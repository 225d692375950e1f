//! # Error Types
//!
//! Structured error types for split_core. Every validation failure is a
//! returned value with enough context for a host to build a status message
//! or ship the error over JSON, never a panic.
//!
//! ## Example
//!
//! ```rust
//! use split_core::errors::{SplitError, SplitResult};
//!
//! fn validate_bill(amount: f64) -> SplitResult<()> {
//!     if amount <= 0.0 {
//!         return Err(SplitError::invalid_bill_amount(amount.to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_bill(-5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for split_core operations
pub type SplitResult<T> = Result<T, SplitError>;

/// Structured error type for calculation and input-handling failures.
///
/// Each variant carries the offending value so hosts can render a precise
/// status line or handle the failure programmatically.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SplitError {
    /// The bill amount is missing, zero, negative, or not a finite number
    #[error("Invalid bill amount '{value}': must be greater than zero")]
    InvalidBillAmount { value: String },

    /// No tip rate could be resolved, or the resolved rate is unusable
    #[error("Missing or invalid tip: {reason}")]
    MissingOrInvalidTip { reason: String },

    /// The people count is not a positive integer
    #[error("Invalid people count {value}: must be at least 1")]
    InvalidPeopleCount { value: i64 },

    /// A numeric text input failed to parse entirely
    ///
    /// Distinct from a value that parsed but failed a range check.
    #[error("Could not parse '{text}' as a number for '{field}'")]
    NumericParseError { field: String, text: String },
}

impl SplitError {
    /// Create an InvalidBillAmount error
    pub fn invalid_bill_amount(value: impl Into<String>) -> Self {
        SplitError::InvalidBillAmount {
            value: value.into(),
        }
    }

    /// Create a MissingOrInvalidTip error
    pub fn missing_or_invalid_tip(reason: impl Into<String>) -> Self {
        SplitError::MissingOrInvalidTip {
            reason: reason.into(),
        }
    }

    /// Create an InvalidPeopleCount error
    pub fn invalid_people_count(value: i64) -> Self {
        SplitError::InvalidPeopleCount { value }
    }

    /// Create a NumericParseError
    pub fn numeric_parse(field: impl Into<String>, text: impl Into<String>) -> Self {
        SplitError::NumericParseError {
            field: field.into(),
            text: text.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SplitError::InvalidBillAmount { .. } => "INVALID_BILL_AMOUNT",
            SplitError::MissingOrInvalidTip { .. } => "MISSING_OR_INVALID_TIP",
            SplitError::InvalidPeopleCount { .. } => "INVALID_PEOPLE_COUNT",
            SplitError::NumericParseError { .. } => "NUMERIC_PARSE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SplitError::invalid_bill_amount("-5");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: SplitError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SplitError::missing_or_invalid_tip("none selected").error_code(),
            "MISSING_OR_INVALID_TIP"
        );
        assert_eq!(
            SplitError::numeric_parse("bill", "abc").error_code(),
            "NUMERIC_PARSE_ERROR"
        );
    }

    #[test]
    fn test_display_includes_context() {
        let error = SplitError::numeric_parse("people", "two");
        let msg = error.to_string();
        assert!(msg.contains("people"));
        assert!(msg.contains("two"));
    }
}
