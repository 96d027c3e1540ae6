//! Configuration error types.

use deposit_core::DepositError;
use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown settings key.
    #[error("Unknown configuration key: {key}")]
    UnknownKey {
        /// The key as given.
        key: String,
    },

    /// Validation error.
    #[error("{message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("{}", join_messages(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// A settings value that cannot be stored under its key.
    #[error("Invalid value for {key}: {value}. {reason}")]
    InvalidValue {
        /// Settings key.
        key: String,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No usable configuration directory on this system.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl ConfigError {
    /// Returns the first user-facing validation message, if this is a
    /// validation failure.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        match self {
            Self::Validation { message, .. } => Some(message),
            Self::MultipleValidationErrors(errors) => errors.first().map(|e| e.message.as_str()),
            _ => None,
        }
    }

    /// Returns every validation failure carried by this error.
    #[must_use]
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        match self {
            Self::Validation { field, message } => {
                vec![ValidationError::new(field.clone(), message.clone())]
            }
            Self::MultipleValidationErrors(errors) => errors.clone(),
            _ => Vec::new(),
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
    /// Validation rule that was violated.
    pub rule: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates a validation error with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }

    /// Builds a validation error from a value-object failure.
    pub fn from_deposit(field: impl Into<String>, error: &DepositError) -> Self {
        let rule = match error {
            DepositError::OutOfRange { .. } => "range",
            DepositError::InvalidNumber { .. } => "finite",
            DepositError::NotWholeMonths { .. } => "whole_months",
            DepositError::UnknownFrequency { .. } => "frequency",
        };
        Self::with_rule(field, error.to_string(), rule)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref rule) = self.rule {
            write!(f, "{}: {} (rule: {})", self.field, self.message, rule)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            ConfigError::Deserialization(err.to_string())
        } else {
            ConfigError::Serialization(err.to_string())
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Deserialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

/// Trait for validatable inputs and configurations.
pub trait Validate {
    /// Validates the value.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the value is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> ConfigResult<()> {
        collapse(self.validate())
    }
}

/// Turns a list of failures into a single result.
pub(crate) fn collapse(errors: Vec<ValidationError>) -> ConfigResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(into_error(errors))
    }
}

/// Folds one or more failures into a single error.
pub(crate) fn into_error(mut errors: Vec<ValidationError>) -> ConfigError {
    if errors.len() == 1 {
        let err = errors.remove(0);
        ConfigError::Validation {
            field: err.field,
            message: err.message,
        }
    } else {
        ConfigError::MultipleValidationErrors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_error_collapses_to_validation() {
        let err = collapse(vec![ValidationError::new("principal", "too small")]).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
        assert_eq!(err.to_string(), "too small");
        assert_eq!(err.first_message(), Some("too small"));
    }

    #[test]
    fn test_multiple_errors_keep_order() {
        let err = collapse(vec![
            ValidationError::new("principal", "first"),
            ValidationError::new("months", "second"),
        ])
        .unwrap_err();
        assert_eq!(err.first_message(), Some("first"));
        assert_eq!(err.to_string(), "first; second");
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_rule_from_deposit_error() {
        let e = ValidationError::from_deposit(
            "duration_months",
            &DepositError::NotWholeMonths { name: "Duration", value: 4.5 },
        );
        assert_eq!(e.rule.as_deref(), Some("whole_months"));
        assert_eq!(
            e.to_string(),
            "duration_months: Duration must be a whole number of months (rule: whole_months)"
        );
    }
}
