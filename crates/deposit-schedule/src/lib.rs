//! # Deposit Schedule
//!
//! Month-by-month compound-interest schedules for a term deposit.
//!
//! Given a validated principal, annual rate and term, the engine produces one
//! [`CalculationResult`] per month holding the cumulative interest and the
//! balance, both rounded to cents. The four reinvestment modes differ only in
//! the number of compounding periods per year:
//!
//! | Entry point     | Periods per year |
//! |-----------------|------------------|
//! | [`monthly`]     | 12               |
//! | [`quarterly`]   | 4                |
//! | [`annually`]    | 1                |
//! | [`at_maturity`] | 12 / months      |
//!
//! ## Example
//!
//! ```rust
//! use deposit_core::prelude::*;
//! use deposit_schedule::{annually, ScheduleSummary};
//!
//! let principal = PrincipalAmount::new(10_000.0).unwrap();
//! let rows = annually(
//!     principal,
//!     AnnualInterestRate::new(1.2).unwrap(),
//!     DurationMonths::new(12.0).unwrap(),
//! );
//!
//! let summary = ScheduleSummary::from_rows(principal, &rows).unwrap();
//! assert_eq!(summary.final_balance, 10_120.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]

pub mod engine;
pub mod result;
pub mod summary;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{
        annually, at_maturity, compute, compute_schedule, monthly, quarterly,
    };
    pub use crate::result::CalculationResult;
    pub use crate::summary::{compare_frequencies, FrequencyComparison, ScheduleSummary};
}

pub use engine::{
    annually, at_maturity, compute, compute_schedule, compute_schedule_unchecked, monthly,
    quarterly,
};
pub use result::CalculationResult;
pub use summary::{compare_frequencies, FrequencyComparison, ScheduleSummary};
