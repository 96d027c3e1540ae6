//! Error types for the Deposit calculator.
//!
//! Every variant renders as a user-facing sentence; the `Display` output is
//! the message shown to the person who typed the value.

use thiserror::Error;

/// A specialized Result type for Deposit operations.
pub type DepositResult<T> = Result<T, DepositError>;

/// The main error type for value-object validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DepositError {
    /// Input lies outside its closed numeric interval.
    #[error("{name} must be between {min} and {max}. Received: {received}")]
    OutOfRange {
        /// Human name of the input ("Principal amount", "Interest rate", ...).
        name: &'static str,
        /// Formatted lower bound.
        min: String,
        /// Formatted upper bound.
        max: String,
        /// Formatted offending value.
        received: String,
    },

    /// Input is NaN or infinite.
    #[error("{name} must be a valid number. Received: {received}")]
    InvalidNumber {
        /// Human name of the input.
        name: &'static str,
        /// Raw rendering of the offending value (`NaN`, `Infinity`, ...).
        received: String,
    },

    /// Duration carries a fractional month.
    #[error("{name} must be a whole number of months")]
    NotWholeMonths {
        /// Human name of the input.
        name: &'static str,
        /// The fractional value.
        value: f64,
    },

    /// Frequency name not recognised.
    #[error("Unknown reinvestment frequency: {name}. Use monthly, quarterly, annually or at-maturity")]
    UnknownFrequency {
        /// The name as given.
        name: String,
    },
}

impl DepositError {
    /// Creates a range violation error.
    #[must_use]
    pub fn out_of_range(
        name: &'static str,
        min: impl Into<String>,
        max: impl Into<String>,
        received: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            name,
            min: min.into(),
            max: max.into(),
            received: received.into(),
        }
    }

    /// Creates an invalid-number error.
    #[must_use]
    pub fn invalid_number(name: &'static str, received: impl Into<String>) -> Self {
        Self::InvalidNumber {
            name,
            received: received.into(),
        }
    }

    /// Returns the human name of the input that failed.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::OutOfRange { name, .. }
            | Self::InvalidNumber { name, .. }
            | Self::NotWholeMonths { name, .. } => name,
            Self::UnknownFrequency { .. } => "Frequency",
        }
    }

    /// Returns true for range violations.
    #[must_use]
    pub fn is_range_violation(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = DepositError::out_of_range("Duration", "3", "60 months", "2 months");
        assert_eq!(
            err.to_string(),
            "Duration must be between 3 and 60 months. Received: 2 months"
        );
        assert!(err.is_range_violation());
    }

    #[test]
    fn test_invalid_number_display() {
        let err = DepositError::invalid_number("Interest rate", "NaN");
        assert_eq!(
            err.to_string(),
            "Interest rate must be a valid number. Received: NaN"
        );
        assert_eq!(err.field_name(), "Interest rate");
    }

    #[test]
    fn test_whole_months_display() {
        let err = DepositError::NotWholeMonths {
            name: "Duration",
            value: 3.5,
        };
        assert_eq!(err.to_string(), "Duration must be a whole number of months");
        assert!(!err.is_range_violation());
    }
}
