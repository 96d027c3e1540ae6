//! Principal amount.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Bounds;
use crate::error::{DepositError, DepositResult};
use crate::format::format_currency;

const BOUNDS: Bounds = Bounds {
    name: "Principal amount",
    min: PrincipalAmount::MIN,
    max: PrincipalAmount::MAX,
    describe_min: format_currency,
    describe_max: format_currency,
    describe_value: format_currency,
};

/// The amount deposited at the start of the term, in dollars.
///
/// # Example
///
/// ```rust
/// use deposit_core::types::PrincipalAmount;
///
/// let principal = PrincipalAmount::new(10_000.0).unwrap();
/// assert_eq!(principal.value(), 10_000.0);
///
/// let err = PrincipalAmount::new(0.0).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Principal amount must be between $1 and $10,000,000. Received: $0"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PrincipalAmount(f64);

impl PrincipalAmount {
    /// Smallest accepted principal.
    pub const MIN: f64 = 1.0;
    /// Largest accepted principal.
    pub const MAX: f64 = 10_000_000.0;

    /// Validates a raw amount.
    ///
    /// # Errors
    ///
    /// `DepositError::InvalidNumber` for NaN or infinite input,
    /// `DepositError::OutOfRange` outside `[1, 10,000,000]`.
    pub fn new(raw: f64) -> DepositResult<Self> {
        BOUNDS.check(raw).map(Self)
    }

    /// Returns the amount unchanged from the validated input.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for PrincipalAmount {
    type Error = DepositError;

    fn try_from(raw: f64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<PrincipalAmount> for f64 {
    fn from(p: PrincipalAmount) -> Self {
        p.0
    }
}

impl fmt::Display for PrincipalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_currency(self.0))
    }
}
