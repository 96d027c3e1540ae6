//! Raw calculator inputs and their resolution into validated terms.
//!
//! The value-object constructors each report only their own failure. This
//! module runs all of them, hands every failure to an [`ErrorReporter`] and
//! folds the failures into one [`ConfigError`].

use serde::{Deserialize, Serialize};

use deposit_core::report::{ErrorReporter, NoopReporter};
use deposit_core::types::{
    AnnualInterestRate, DurationMonths, PrincipalAmount, ReinvestmentFrequency,
};
use deposit_core::DepositError;
use deposit_schedule::{compute, CalculationResult, ScheduleSummary};

use crate::error::{into_error, ConfigError, ConfigResult, Validate, ValidationError};

/// Field name used for the principal in validation errors.
pub const PRINCIPAL_FIELD: &str = "principal";
/// Field name used for the annual rate in validation errors.
pub const RATE_FIELD: &str = "annual_rate";
/// Field name used for the duration in validation errors.
pub const DURATION_FIELD: &str = "duration_months";
/// Field name used for the frequency in validation errors.
pub const FREQUENCY_FIELD: &str = "frequency";

/// The four values a calculator form holds, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositInputs {
    /// Principal in dollars.
    pub principal: f64,
    /// Annual rate as a percentage.
    pub annual_rate: f64,
    /// Term length in months.
    pub duration_months: f64,
    /// Reinvestment frequency.
    #[serde(default)]
    pub frequency: ReinvestmentFrequency,
}

impl DepositInputs {
    /// Creates a set of raw inputs.
    #[must_use]
    pub fn new(
        principal: f64,
        annual_rate: f64,
        duration_months: f64,
        frequency: ReinvestmentFrequency,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            duration_months,
            frequency,
        }
    }

    /// Builds inputs from text fields.
    ///
    /// Numbers that do not parse become NaN so the value-object guard
    /// rejects them with its usual message.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the frequency name is unknown.
    pub fn parse(
        principal: &str,
        annual_rate: &str,
        duration_months: &str,
        frequency: &str,
    ) -> ConfigResult<Self> {
        let frequency = frequency.parse::<ReinvestmentFrequency>().map_err(|e| {
            ConfigError::Validation {
                field: FREQUENCY_FIELD.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self::new(
            parse_number(principal),
            parse_number(annual_rate),
            parse_number(duration_months),
            frequency,
        ))
    }

    /// Validates every field, reporting each failure.
    ///
    /// The duration must also be a whole number of months here; the bare
    /// [`DurationMonths::new`] range check does not ask for that.
    ///
    /// # Errors
    ///
    /// `ConfigError::Validation` for one failure,
    /// `ConfigError::MultipleValidationErrors` for several, in field order.
    pub fn resolve(&self, reporter: &dyn ErrorReporter) -> ConfigResult<DepositTerms> {
        match self.check() {
            Ok(terms) => {
                log::debug!("resolved deposit terms: {terms:?}");
                Ok(terms)
            }
            Err(failures) => {
                for (field, error) in &failures {
                    reporter.report(field, error);
                }
                Err(into_error(to_validation_errors(&failures)))
            }
        }
    }

    fn check(&self) -> Result<DepositTerms, Vec<(&'static str, DepositError)>> {
        let mut failures = Vec::new();

        let principal = PrincipalAmount::new(self.principal)
            .map_err(|e| failures.push((PRINCIPAL_FIELD, e)))
            .ok();
        let annual_rate = AnnualInterestRate::new(self.annual_rate)
            .map_err(|e| failures.push((RATE_FIELD, e)))
            .ok();
        let duration = DurationMonths::new_whole(self.duration_months)
            .map_err(|e| failures.push((DURATION_FIELD, e)))
            .ok();

        match (principal, annual_rate, duration) {
            (Some(principal), Some(annual_rate), Some(duration)) => Ok(DepositTerms {
                principal,
                annual_rate,
                duration,
                frequency: self.frequency,
            }),
            _ => Err(failures),
        }
    }
}

fn to_validation_errors(failures: &[(&'static str, DepositError)]) -> Vec<ValidationError> {
    failures
        .iter()
        .map(|(field, error)| ValidationError::from_deposit(*field, error))
        .collect()
}

impl Validate for DepositInputs {
    fn validate(&self) -> Vec<ValidationError> {
        match self.check() {
            Ok(_) => Vec::new(),
            Err(failures) => to_validation_errors(&failures),
        }
    }
}

impl Default for DepositInputs {
    /// $10,000 at 1.2% for 12 months, reinvested monthly.
    fn default() -> Self {
        Self::new(10_000.0, 1.2, 12.0, ReinvestmentFrequency::Monthly)
    }
}

/// Validated calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositTerms {
    /// Principal amount.
    pub principal: PrincipalAmount,
    /// Annual rate.
    pub annual_rate: AnnualInterestRate,
    /// Term length, a whole number of months.
    pub duration: DurationMonths,
    /// Reinvestment frequency.
    pub frequency: ReinvestmentFrequency,
}

impl DepositTerms {
    /// Computes the month-by-month schedule.
    #[must_use]
    pub fn schedule(&self) -> Vec<CalculationResult> {
        compute(self.frequency, self.principal, self.annual_rate, self.duration)
    }

    /// Computes the end-of-term summary.
    #[must_use]
    pub fn summary(&self) -> Option<ScheduleSummary> {
        ScheduleSummary::from_rows(self.principal, &self.schedule())
    }
}

/// Resolves inputs without reporting.
///
/// # Errors
///
/// See [`DepositInputs::resolve`].
pub fn resolve_quietly(inputs: &DepositInputs) -> ConfigResult<DepositTerms> {
    inputs.resolve(&NoopReporter)
}

fn parse_number(text: &str) -> f64 {
    text.trim().replace(',', "").parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deposit_core::report::CollectingReporter;

    #[test]
    fn test_resolve_valid() {
        let inputs = DepositInputs::new(10_000.0, 1.2, 3.0, ReinvestmentFrequency::Quarterly);
        let terms = inputs.resolve(&NoopReporter).unwrap();
        assert_eq!(terms.frequency, ReinvestmentFrequency::Quarterly);
        assert_eq!(terms.schedule()[2].balance, 10_030.0);
    }

    #[test]
    fn test_every_failure_is_reported() {
        let reporter = CollectingReporter::new();
        let inputs = DepositInputs::new(0.0, 20.0, 2.0, ReinvestmentFrequency::Monthly);
        let err = inputs.resolve(&reporter).unwrap_err();

        assert_eq!(reporter.entries().len(), 3);
        assert_eq!(
            err.first_message(),
            Some("Principal amount must be between $1 and $10,000,000. Received: $0")
        );
        let fields: Vec<_> = err.validation_errors().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![PRINCIPAL_FIELD, RATE_FIELD, DURATION_FIELD]);
    }

    #[test]
    fn test_fractional_months_rejected_with_distinct_message() {
        let inputs = DepositInputs::new(10_000.0, 1.2, 6.5, ReinvestmentFrequency::Monthly);
        let err = resolve_quietly(&inputs).unwrap_err();
        assert_eq!(err.to_string(), "Duration must be a whole number of months");
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn test_parse_text_fields() {
        let inputs = DepositInputs::parse("25,000", "3.5", "24", "at-maturity").unwrap();
        assert_eq!(inputs.principal, 25_000.0);
        assert_eq!(inputs.frequency, ReinvestmentFrequency::AtMaturity);

        let inputs = DepositInputs::parse("abc", "3.5", "24", "monthly").unwrap();
        assert_eq!(
            resolve_quietly(&inputs).unwrap_err().to_string(),
            "Principal amount must be a valid number. Received: NaN"
        );

        assert!(DepositInputs::parse("1", "1", "3", "weekly").is_err());
    }

    #[test]
    fn test_validate_trait() {
        assert!(DepositInputs::default().is_valid());
        let bad = DepositInputs::new(f64::NAN, 1.0, 12.0, ReinvestmentFrequency::Annually);
        assert_eq!(bad.validate().len(), 1);
        assert!(bad.validate_or_error().is_err());
    }

    #[test]
    fn test_summary() {
        let terms = resolve_quietly(&DepositInputs::default()).unwrap();
        let summary = terms.summary().unwrap();
        assert_eq!(summary.months, 12);
        assert!(summary.final_balance > 10_000.0);
    }
}
