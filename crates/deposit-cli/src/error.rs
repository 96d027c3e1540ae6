//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// One or more inputs failed validation.
    #[error("{}", .0.join("\n"))]
    InvalidInputs(Vec<String>),

    /// Stored settings could not be read or written.
    #[error("Configuration error: {0}")]
    Config(#[from] deposit_config::ConfigError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
