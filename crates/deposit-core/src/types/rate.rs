//! Annual interest rate.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Bounds;
use crate::error::{DepositError, DepositResult};
use crate::format::format_percent;

const BOUNDS: Bounds = Bounds {
    name: "Interest rate",
    min: AnnualInterestRate::MIN,
    max: AnnualInterestRate::MAX,
    describe_min: format_percent,
    describe_max: format_percent,
    describe_value: format_percent,
};

/// Annual interest rate expressed as a percentage (1.2 means 1.2%).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AnnualInterestRate(f64);

impl AnnualInterestRate {
    /// Lowest accepted rate.
    pub const MIN: f64 = 0.0;
    /// Highest accepted rate.
    pub const MAX: f64 = 15.0;

    /// Validates a raw percentage.
    ///
    /// # Errors
    ///
    /// `DepositError::InvalidNumber` for NaN or infinite input,
    /// `DepositError::OutOfRange` outside `[0, 15]`.
    pub fn new(raw: f64) -> DepositResult<Self> {
        BOUNDS.check(raw).map(Self)
    }

    /// Returns the percentage as entered.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the rate as a fraction (1.2% = 0.012).
    #[must_use]
    pub fn as_fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl TryFrom<f64> for AnnualInterestRate {
    type Error = DepositError;

    fn try_from(raw: f64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<AnnualInterestRate> for f64 {
    fn from(r: AnnualInterestRate) -> Self {
        r.0
    }
}

impl fmt::Display for AnnualInterestRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_percent(self.0))
    }
}
