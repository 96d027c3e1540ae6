//! Schedule rows.

use serde::{Deserialize, Serialize};

/// One month of a deposit schedule.
///
/// `interest` is cumulative from the start of the term; `balance` is the
/// principal plus that interest. Both are rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Month number, starting at 1.
    pub month: u32,
    /// Annual rate the row was computed with, as a percentage.
    pub annual_rate: f64,
    /// Interest earned from day zero through this month.
    pub interest: f64,
    /// Principal plus interest at the end of this month.
    pub balance: f64,
}

impl CalculationResult {
    /// Creates a schedule row.
    #[must_use]
    pub fn new(month: u32, annual_rate: f64, interest: f64, balance: f64) -> Self {
        Self {
            month,
            annual_rate,
            interest,
            balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let row = CalculationResult::new(1, 1.2, 10.0, 10_010.0);
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json["month"], 1);
        assert_eq!(json["annual_rate"], 1.2);
        assert_eq!(json["balance"], 10_010.0);
    }
}
