//! Validated input types for deposit calculations.
//!
//! - [`PrincipalAmount`]: amount deposited, in dollars
//! - [`AnnualInterestRate`]: annual rate as a percentage
//! - [`DurationMonths`]: term length in months
//! - [`ReinvestmentFrequency`]: how often interest is compounded
//!
//! The numeric types wrap an `f64` behind a private field; the only way to
//! obtain one is through its validating constructor.

mod duration;
mod frequency;
mod principal;
mod rate;

pub use duration::DurationMonths;
pub use frequency::ReinvestmentFrequency;
pub use principal::PrincipalAmount;
pub use rate::AnnualInterestRate;

use crate::error::{DepositError, DepositResult};
use crate::format::describe_number;

/// Closed numeric interval with entity-specific rendering.
pub(crate) struct Bounds {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub describe_min: fn(f64) -> String,
    pub describe_max: fn(f64) -> String,
    pub describe_value: fn(f64) -> String,
}

impl Bounds {
    /// Runs the finite guard, then the inclusive range check.
    pub(crate) fn check(&self, raw: f64) -> DepositResult<f64> {
        if !raw.is_finite() {
            log::debug!("{} rejected non-finite input {}", self.name, raw);
            return Err(DepositError::invalid_number(self.name, describe_number(raw)));
        }
        if raw < self.min || raw > self.max {
            log::debug!("{} rejected out-of-range input {}", self.name, raw);
            return Err(DepositError::out_of_range(
                self.name,
                (self.describe_min)(self.min),
                (self.describe_max)(self.max),
                (self.describe_value)(raw),
            ));
        }
        Ok(raw)
    }
}
