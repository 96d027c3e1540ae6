//! # Deposit Core
//!
//! Validated inputs and shared helpers for the Deposit term-deposit
//! calculator.
//!
//! - **Types**: [`PrincipalAmount`], [`AnnualInterestRate`],
//!   [`DurationMonths`] and [`ReinvestmentFrequency`]
//! - **Rounding**: [`round_to_cents`], the half-up cent rounding used for
//!   every reported amount
//! - **Formatting**: currency, percentage and month renderings used in
//!   validation messages
//! - **Reporting**: the [`ErrorReporter`] hook for surfacing failures
//!
//! ## Example
//!
//! ```rust
//! use deposit_core::prelude::*;
//!
//! let principal = PrincipalAmount::new(10_000.0).unwrap();
//! let rate = AnnualInterestRate::new(1.2).unwrap();
//! let months = DurationMonths::new(12.0).unwrap();
//!
//! assert_eq!(ReinvestmentFrequency::Quarterly.periods_per_year(months), 4.0);
//! assert!(DurationMonths::new(2.0).is_err());
//! # let _ = (principal, rate);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::manual_range_contains)]

pub mod error;
pub mod format;
pub mod report;
pub mod rounding;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{DepositError, DepositResult};
    pub use crate::report::{CollectingReporter, ErrorReporter, LogReporter, NoopReporter};
    pub use crate::rounding::round_to_cents;
    pub use crate::types::{
        AnnualInterestRate, DurationMonths, PrincipalAmount, ReinvestmentFrequency,
    };
}

// Re-export commonly used items at crate root
pub use error::{DepositError, DepositResult};
pub use report::{CollectingReporter, ErrorReporter, LogReporter, NoopReporter};
pub use rounding::round_to_cents;
pub use types::{AnnualInterestRate, DurationMonths, PrincipalAmount, ReinvestmentFrequency};

/// Validates a raw principal amount. Same as [`PrincipalAmount::new`].
pub fn create_principal(raw: f64) -> DepositResult<PrincipalAmount> {
    PrincipalAmount::new(raw)
}

/// Validates a raw annual percentage. Same as [`AnnualInterestRate::new`].
pub fn create_annual_interest_rate(raw: f64) -> DepositResult<AnnualInterestRate> {
    AnnualInterestRate::new(raw)
}

/// Validates a raw month count. Same as [`DurationMonths::new`].
pub fn create_duration_months(raw: f64) -> DepositResult<DurationMonths> {
    DurationMonths::new(raw)
}
