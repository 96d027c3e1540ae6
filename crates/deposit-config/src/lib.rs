//! # Deposit Configuration Layer
//!
//! Turns raw calculator inputs into validated deposit terms and manages the
//! settings file the command-line front end reads its defaults from.
//!
//! # Features
//!
//! - **Input resolution**: runs every value-object validator, reports each
//!   failure through an [`ErrorReporter`](deposit_core::ErrorReporter) and
//!   aggregates them into one error
//! - **Whole-month check**: the form layer refuses fractional terms
//! - **Settings**: defaults, per-key get/set/reset, JSON or TOML files
//!
//! # Example
//!
//! ```rust
//! use deposit_config::{DepositInputs, Validate};
//! use deposit_core::{CollectingReporter, ReinvestmentFrequency};
//!
//! let inputs = DepositInputs::new(0.0, 1.2, 2.0, ReinvestmentFrequency::Monthly);
//! assert!(!inputs.is_valid());
//!
//! let reporter = CollectingReporter::new();
//! let err = inputs.resolve(&reporter).unwrap_err();
//! assert_eq!(reporter.messages().len(), 2);
//! assert_eq!(
//!     err.first_message(),
//!     Some("Principal amount must be between $1 and $10,000,000. Received: $0"),
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod inputs;
mod settings;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use inputs::{
    resolve_quietly, DepositInputs, DepositTerms, DURATION_FIELD, FREQUENCY_FIELD,
    PRINCIPAL_FIELD, RATE_FIELD,
};
pub use settings::{default_settings_path, CalculatorSettings, SettingKey, OUTPUT_FORMATS};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::inputs::{DepositInputs, DepositTerms};
    pub use crate::settings::{CalculatorSettings, SettingKey};
}
