//! Closed-form compounding engine.
//!
//! Month `m` of a term is valued directly as
//!
//! ```text
//! balance(m) = P * (1 + r/n)^(n * m/12)
//! ```
//!
//! where `r` is the annual rate as a fraction and `n` the compounding periods
//! per year. Every row is evaluated from this formula on its own; a row never
//! starts from the previous row's rounded balance, so extending a term leaves
//! the earlier rows untouched.

use deposit_core::rounding::round_to_cents;
use deposit_core::types::{
    AnnualInterestRate, DurationMonths, PrincipalAmount, ReinvestmentFrequency,
};

use crate::result::CalculationResult;

/// Computes the schedule for an arbitrary compounding frequency.
///
/// # Example
///
/// ```rust
/// use deposit_core::prelude::*;
/// use deposit_schedule::compute_schedule;
///
/// let rows = compute_schedule(
///     PrincipalAmount::new(10_000.0).unwrap(),
///     AnnualInterestRate::new(1.2).unwrap(),
///     DurationMonths::new(3.0).unwrap(),
///     12.0,
/// );
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[2].balance, 10_030.03);
/// ```
#[must_use]
pub fn compute_schedule(
    principal: PrincipalAmount,
    annual_rate: AnnualInterestRate,
    duration: DurationMonths,
    periods_per_year: f64,
) -> Vec<CalculationResult> {
    compute_schedule_unchecked(
        principal.value(),
        annual_rate.value(),
        duration.value(),
        periods_per_year,
    )
}

/// Computes the schedule from raw numbers without validating them.
///
/// Produces one row per whole month `1..=months`. Degenerate input is not
/// rejected: a NaN `periods_per_year` yields NaN amounts and a term shorter
/// than one month yields an empty schedule.
#[must_use]
pub fn compute_schedule_unchecked(
    principal: f64,
    annual_rate: f64,
    months: f64,
    periods_per_year: f64,
) -> Vec<CalculationResult> {
    let r = annual_rate / 100.0;
    let n = periods_per_year;
    let count = if months >= 1.0 { months.floor() as u32 } else { 0 };

    log::debug!(
        "computing {count} rows: principal={principal}, rate={annual_rate}%, periods/yr={n}"
    );

    (1..=count)
        .map(|m| {
            let t = f64::from(m) / 12.0;
            let balance_raw = principal * (1.0 + r / n).powf(n * t);
            CalculationResult {
                month: m,
                annual_rate,
                interest: round_to_cents(balance_raw - principal),
                balance: round_to_cents(balance_raw),
            }
        })
        .collect()
}

/// Computes the schedule for one of the named frequencies.
#[must_use]
pub fn compute(
    frequency: ReinvestmentFrequency,
    principal: PrincipalAmount,
    annual_rate: AnnualInterestRate,
    duration: DurationMonths,
) -> Vec<CalculationResult> {
    compute_schedule(
        principal,
        annual_rate,
        duration,
        frequency.periods_per_year(duration),
    )
}

/// Interest reinvested every month (12 periods per year).
#[must_use]
pub fn monthly(
    principal: PrincipalAmount,
    annual_rate: AnnualInterestRate,
    duration: DurationMonths,
) -> Vec<CalculationResult> {
    compute(ReinvestmentFrequency::Monthly, principal, annual_rate, duration)
}

/// Interest reinvested every quarter (4 periods per year).
#[must_use]
pub fn quarterly(
    principal: PrincipalAmount,
    annual_rate: AnnualInterestRate,
    duration: DurationMonths,
) -> Vec<CalculationResult> {
    compute(ReinvestmentFrequency::Quarterly, principal, annual_rate, duration)
}

/// Interest reinvested once a year.
#[must_use]
pub fn annually(
    principal: PrincipalAmount,
    annual_rate: AnnualInterestRate,
    duration: DurationMonths,
) -> Vec<CalculationResult> {
    compute(ReinvestmentFrequency::Annually, principal, annual_rate, duration)
}

/// Interest paid once, at the end of the term (`12 / months` periods per year).
#[must_use]
pub fn at_maturity(
    principal: PrincipalAmount,
    annual_rate: AnnualInterestRate,
    duration: DurationMonths,
) -> Vec<CalculationResult> {
    compute(ReinvestmentFrequency::AtMaturity, principal, annual_rate, duration)
}
