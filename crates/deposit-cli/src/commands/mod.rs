//! CLI command implementations.

pub mod compare;
pub mod config;
pub mod schedule;

// Re-export submodules for convenience
pub use compare::CompareArgs;
pub use config::ConfigArgs;
pub use schedule::ScheduleArgs;

use clap::Args;
use std::path::{Path, PathBuf};

use deposit_config::{default_settings_path, CalculatorSettings, DepositInputs, DepositTerms};
use deposit_core::report::CollectingReporter;
use deposit_core::types::ReinvestmentFrequency;

use crate::error::{CliError, CliResult};

/// Deposit inputs shared by the calculating commands.
///
/// Anything left out is taken from the stored settings.
#[derive(Args, Debug, Clone)]
pub struct TermArgs {
    /// Principal in dollars (1 to 10,000,000)
    #[arg(short, long)]
    pub principal: Option<f64>,

    /// Annual interest rate in percent, e.g. 1.2 for 1.2% (0 to 15)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Term in whole months (3 to 60)
    #[arg(short, long)]
    pub months: Option<f64>,

    /// Reinvestment frequency: monthly, quarterly, annually or at-maturity
    #[arg(long)]
    pub frequency: Option<ReinvestmentFrequency>,
}

impl TermArgs {
    /// Merges the arguments over the stored settings.
    pub fn inputs(&self, settings: &CalculatorSettings) -> DepositInputs {
        let stored = settings.inputs();
        DepositInputs::new(
            self.principal.unwrap_or(stored.principal),
            self.rate.unwrap_or(stored.annual_rate),
            self.months.unwrap_or(stored.duration_months),
            self.frequency.unwrap_or(stored.frequency),
        )
    }

    /// Validates the merged inputs, collecting every failure.
    pub fn resolve(&self, settings: &CalculatorSettings) -> CliResult<DepositTerms> {
        let reporter = CollectingReporter::new();
        let inputs = self.inputs(settings);
        match inputs.resolve(&reporter) {
            Ok(terms) => Ok(terms),
            Err(err) => {
                tracing::debug!(error = %err, "input validation failed");
                Err(CliError::InvalidInputs(reporter.messages()))
            }
        }
    }
}

/// Returns the settings file in effect.
pub fn settings_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(default_settings_path()?),
    }
}

/// Loads the settings file in effect.
pub fn load_settings(explicit: Option<&Path>) -> CliResult<CalculatorSettings> {
    let path = settings_path(explicit)?;
    Ok(CalculatorSettings::load(&path)?)
}
