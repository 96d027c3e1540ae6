//! Deposit term length.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Bounds;
use crate::error::{DepositError, DepositResult};
use crate::format::{describe_number, format_months};

const BOUNDS: Bounds = Bounds {
    name: "Duration",
    min: DurationMonths::MIN,
    max: DurationMonths::MAX,
    describe_min: describe_number,
    describe_max: format_months,
    describe_value: format_months,
};

/// Length of the deposit term in months.
///
/// The range check does not require a whole number; call
/// [`DurationMonths::ensure_whole`] (or [`DurationMonths::new_whole`]) where
/// fractional months must be refused.
///
/// # Example
///
/// ```rust
/// use deposit_core::types::DurationMonths;
///
/// let err = DurationMonths::new(2.0).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Duration must be between 3 and 60 months. Received: 2 months"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DurationMonths(f64);

impl DurationMonths {
    /// Shortest accepted term.
    pub const MIN: f64 = 3.0;
    /// Longest accepted term.
    pub const MAX: f64 = 60.0;

    /// Validates a raw month count.
    ///
    /// # Errors
    ///
    /// `DepositError::InvalidNumber` for NaN or infinite input,
    /// `DepositError::OutOfRange` outside `[3, 60]`.
    pub fn new(raw: f64) -> DepositResult<Self> {
        BOUNDS.check(raw).map(Self)
    }

    /// Validates a raw month count and also requires a whole number.
    ///
    /// # Errors
    ///
    /// Everything [`DurationMonths::new`] returns, plus
    /// `DepositError::NotWholeMonths` for fractional input.
    pub fn new_whole(raw: f64) -> DepositResult<Self> {
        let duration = Self::new(raw)?;
        duration.ensure_whole()?;
        Ok(duration)
    }

    /// Fails with `DepositError::NotWholeMonths` if the term has a fraction.
    pub fn ensure_whole(self) -> DepositResult<()> {
        if self.0.fract() == 0.0 {
            Ok(())
        } else {
            Err(DepositError::NotWholeMonths {
                name: BOUNDS.name,
                value: self.0,
            })
        }
    }

    /// Returns the month count as entered.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the number of complete months in the term.
    #[must_use]
    pub fn whole_months(self) -> u32 {
        self.0.floor() as u32
    }

    /// Returns the term length in years.
    #[must_use]
    pub fn years(self) -> f64 {
        self.0 / 12.0
    }
}

impl TryFrom<f64> for DurationMonths {
    type Error = DepositError;

    fn try_from(raw: f64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<DurationMonths> for f64 {
    fn from(d: DurationMonths) -> Self {
        d.0
    }
}

impl fmt::Display for DurationMonths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_months(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_accepted() {
        assert_eq!(DurationMonths::new(3.0).unwrap().value(), 3.0);
        assert_eq!(DurationMonths::new(60.0).unwrap().value(), 60.0);
    }

    #[test]
    fn test_above_max() {
        let err = DurationMonths::new(61.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Duration must be between 3 and 60 months. Received: 61 months"
        );
    }

    #[test]
    fn test_nan_guard_applies_to_duration() {
        let err = DurationMonths::new(f64::NAN).unwrap_err();
        assert_eq!(err.to_string(), "Duration must be a valid number. Received: NaN");
    }

    #[test]
    fn test_fraction_passes_range_check() {
        let d = DurationMonths::new(6.5).unwrap();
        assert_eq!(d.whole_months(), 6);
        assert!(d.ensure_whole().is_err());
    }

    #[test]
    fn test_new_whole() {
        assert!(DurationMonths::new_whole(12.0).is_ok());
        let err = DurationMonths::new_whole(12.5).unwrap_err();
        assert_eq!(err.to_string(), "Duration must be a whole number of months");
        // range is still checked first
        assert!(DurationMonths::new_whole(2.5).unwrap_err().is_range_violation());
    }

    #[test]
    fn test_years() {
        assert_eq!(DurationMonths::new(18.0).unwrap().years(), 1.5);
    }
}
