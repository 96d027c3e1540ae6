//! Cent rounding shared by the schedule engine and summaries.

/// Rounds a monetary amount to two decimal places.
///
/// The amount is scaled by 100 and rounded half-up (ties move towards
/// positive infinity), then scaled back: `9.167 → 9.17`, `0.125 → 0.13`.
/// This is not banker's rounding. NaN and infinities pass through.
///
/// # Example
///
/// ```rust
/// use deposit_core::round_to_cents;
///
/// assert_eq!(round_to_cents(9.167), 9.17);
/// assert_eq!(round_to_cents(10_010.000_000_000_002), 10_010.0);
/// ```
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

/// Rounds to the nearest integer, ties towards positive infinity.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
