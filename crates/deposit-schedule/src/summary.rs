//! Schedule summaries and side-by-side frequency comparison.

use serde::{Deserialize, Serialize};

use deposit_core::rounding::round_to_cents;
use deposit_core::types::{
    AnnualInterestRate, DurationMonths, PrincipalAmount, ReinvestmentFrequency,
};

use crate::engine::compute;
use crate::result::CalculationResult;

/// End-of-term figures for one schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Number of rows in the schedule.
    pub months: u32,
    /// Principal the schedule started from.
    pub principal: f64,
    /// Cumulative interest at the last row.
    pub total_interest: f64,
    /// Balance at the last row.
    pub final_balance: f64,
    /// Total interest as a percentage of principal, rounded to cents.
    pub return_pct: f64,
}

impl ScheduleSummary {
    /// Summarises a schedule. Returns `None` for an empty schedule.
    #[must_use]
    pub fn from_rows(principal: PrincipalAmount, rows: &[CalculationResult]) -> Option<Self> {
        let last = rows.last()?;
        Some(Self {
            months: last.month,
            principal: principal.value(),
            total_interest: last.interest,
            final_balance: last.balance,
            return_pct: round_to_cents(last.interest / principal.value() * 100.0),
        })
    }
}

/// Summary of one frequency in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyComparison {
    /// Frequency the schedule was computed with.
    pub frequency: ReinvestmentFrequency,
    /// Periods per year used for this term.
    pub periods_per_year: f64,
    /// End-of-term figures.
    pub summary: ScheduleSummary,
}

/// Computes every frequency for the same inputs.
///
/// Results follow [`ReinvestmentFrequency::ALL`] order: monthly, quarterly,
/// annually, at maturity.
#[must_use]
pub fn compare_frequencies(
    principal: PrincipalAmount,
    annual_rate: AnnualInterestRate,
    duration: DurationMonths,
) -> Vec<FrequencyComparison> {
    ReinvestmentFrequency::ALL
        .iter()
        .filter_map(|&frequency| {
            let rows = compute(frequency, principal, annual_rate, duration);
            ScheduleSummary::from_rows(principal, &rows).map(|summary| FrequencyComparison {
                frequency,
                periods_per_year: frequency.periods_per_year(duration),
                summary,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_schedule() {
        let p = PrincipalAmount::new(1_000.0).unwrap();
        assert!(ScheduleSummary::from_rows(p, &[]).is_none());
    }

    #[test]
    fn test_summary_uses_last_row() {
        let p = PrincipalAmount::new(10_000.0).unwrap();
        let rows = [
            CalculationResult::new(1, 1.2, 10.0, 10_010.0),
            CalculationResult::new(2, 1.2, 20.01, 10_020.01),
        ];
        let summary = ScheduleSummary::from_rows(p, &rows).unwrap();
        assert_eq!(summary.months, 2);
        assert_eq!(summary.final_balance, 10_020.01);
        assert_eq!(summary.return_pct, 0.2);
    }

    #[test]
    fn test_comparison_order_and_ranking() {
        let cmp = compare_frequencies(
            PrincipalAmount::new(10_000.0).unwrap(),
            AnnualInterestRate::new(6.0).unwrap(),
            DurationMonths::new(24.0).unwrap(),
        );
        let order: Vec<_> = cmp.iter().map(|c| c.frequency).collect();
        assert_eq!(order, ReinvestmentFrequency::ALL.to_vec());

        // more frequent reinvestment earns more over a multi-year term
        let balances: Vec<f64> = cmp.iter().map(|c| c.summary.final_balance).collect();
        assert!(balances[0] > balances[1]);
        assert!(balances[1] > balances[2]);
        assert!(balances[2] > balances[3]);
        assert_eq!(cmp[3].periods_per_year, 0.5);
    }
}
