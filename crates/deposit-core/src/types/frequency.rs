//! Reinvestment (compounding) frequency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DurationMonths;
use crate::error::DepositError;

/// How often earned interest is added back to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReinvestmentFrequency {
    /// Interest compounds every month (12 per year)
    #[default]
    Monthly,
    /// Interest compounds every quarter (4 per year)
    Quarterly,
    /// Interest compounds once a year
    Annually,
    /// Interest compounds once, at the end of the term
    #[serde(alias = "atMaturity", alias = "at_maturity")]
    AtMaturity,
}

impl ReinvestmentFrequency {
    /// All frequencies, in display order.
    pub const ALL: [ReinvestmentFrequency; 4] = [
        ReinvestmentFrequency::Monthly,
        ReinvestmentFrequency::Quarterly,
        ReinvestmentFrequency::Annually,
        ReinvestmentFrequency::AtMaturity,
    ];

    /// Returns the number of compounding periods per year.
    ///
    /// For [`ReinvestmentFrequency::AtMaturity`] this is `12 / months`, which
    /// is fractional whenever the term does not divide a year evenly.
    #[must_use]
    pub fn periods_per_year(&self, duration: DurationMonths) -> f64 {
        match self.fixed_periods_per_year() {
            Some(n) => f64::from(n),
            None => 12.0 / duration.value(),
        }
    }

    /// Returns the periods per year for the named calendar frequencies.
    ///
    /// Returns `None` for at-maturity, whose period depends on the term.
    #[must_use]
    pub fn fixed_periods_per_year(&self) -> Option<u32> {
        match self {
            ReinvestmentFrequency::Monthly => Some(12),
            ReinvestmentFrequency::Quarterly => Some(4),
            ReinvestmentFrequency::Annually => Some(1),
            ReinvestmentFrequency::AtMaturity => None,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ReinvestmentFrequency::Monthly => "monthly",
            ReinvestmentFrequency::Quarterly => "quarterly",
            ReinvestmentFrequency::Annually => "annually",
            ReinvestmentFrequency::AtMaturity => "at-maturity",
        }
    }
}

impl fmt::Display for ReinvestmentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReinvestmentFrequency::Monthly => "Monthly",
            ReinvestmentFrequency::Quarterly => "Quarterly",
            ReinvestmentFrequency::Annually => "Annually",
            ReinvestmentFrequency::AtMaturity => "At Maturity",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ReinvestmentFrequency {
    type Err = DepositError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "12" => Ok(Self::Monthly),
            "quarterly" | "4" => Ok(Self::Quarterly),
            "annually" | "annual" | "1" => Ok(Self::Annually),
            "at-maturity" | "atmaturity" | "at_maturity" | "maturity" => Ok(Self::AtMaturity),
            _ => Err(DepositError::UnknownFrequency {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(n: f64) -> DurationMonths {
        DurationMonths::new(n).unwrap()
    }

    #[test]
    fn test_periods_per_year() {
        let d = months(12.0);
        assert_eq!(ReinvestmentFrequency::Monthly.periods_per_year(d), 12.0);
        assert_eq!(ReinvestmentFrequency::Quarterly.periods_per_year(d), 4.0);
        assert_eq!(ReinvestmentFrequency::Annually.periods_per_year(d), 1.0);
        assert_eq!(ReinvestmentFrequency::AtMaturity.periods_per_year(d), 1.0);
    }

    #[test]
    fn test_at_maturity_depends_on_term() {
        assert_eq!(ReinvestmentFrequency::AtMaturity.periods_per_year(months(6.0)), 2.0);
        assert_eq!(ReinvestmentFrequency::AtMaturity.periods_per_year(months(5.0)), 2.4);
        assert_eq!(ReinvestmentFrequency::AtMaturity.fixed_periods_per_year(), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("monthly".parse::<ReinvestmentFrequency>().unwrap(), ReinvestmentFrequency::Monthly);
        assert_eq!("Quarterly".parse::<ReinvestmentFrequency>().unwrap(), ReinvestmentFrequency::Quarterly);
        assert_eq!("atMaturity".parse::<ReinvestmentFrequency>().unwrap(), ReinvestmentFrequency::AtMaturity);
        assert!("weekly".parse::<ReinvestmentFrequency>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ReinvestmentFrequency::AtMaturity).unwrap();
        assert_eq!(json, "\"at-maturity\"");
        let parsed: ReinvestmentFrequency = serde_json::from_str("\"atMaturity\"").unwrap();
        assert_eq!(parsed, ReinvestmentFrequency::AtMaturity);
    }
}
