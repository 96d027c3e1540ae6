//! Compare command implementation.
//!
//! Shows the end-of-term result of the same deposit under every
//! reinvestment frequency.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use deposit_config::CalculatorSettings;
use deposit_schedule::{compare_frequencies, FrequencyComparison};

use crate::cli::OutputFormat;
use crate::commands::TermArgs;
use crate::output::{money, percent, print_csv, print_header, print_json, print_table};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub term: TermArgs,
}

/// One comparison line formatted for a table.
#[derive(Debug, Serialize, Tabled)]
pub struct CompareRow {
    #[tabled(rename = "Frequency")]
    pub frequency: String,
    #[tabled(rename = "Periods/yr")]
    pub periods: String,
    #[tabled(rename = "Interest")]
    pub interest: String,
    #[tabled(rename = "Balance")]
    pub balance: String,
    #[tabled(rename = "Return")]
    pub return_pct: String,
}

impl From<&FrequencyComparison> for CompareRow {
    fn from(c: &FrequencyComparison) -> Self {
        Self {
            frequency: c.frequency.to_string(),
            periods: format!("{:.4}", c.periods_per_year)
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string(),
            interest: money(c.summary.total_interest),
            balance: money(c.summary.final_balance),
            return_pct: percent(c.summary.return_pct),
        }
    }
}

/// Flat record for CSV output.
#[derive(Debug, Serialize)]
struct CompareRecord {
    frequency: &'static str,
    periods_per_year: f64,
    months: u32,
    total_interest: f64,
    final_balance: f64,
    return_pct: f64,
}

/// Execute the compare command.
pub fn execute(
    args: CompareArgs,
    settings: &CalculatorSettings,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let terms = args.term.resolve(settings)?;
    let comparison = compare_frequencies(terms.principal, terms.annual_rate, terms.duration);

    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header(&format!(
                    "{} at {} for {}",
                    terms.principal, terms.annual_rate, terms.duration
                ));
            }
            let display: Vec<CompareRow> = comparison.iter().map(CompareRow::from).collect();
            print_table(&display)?;
        }
        OutputFormat::Json => print_json(&comparison)?,
        OutputFormat::Csv => {
            let records: Vec<CompareRecord> = comparison
                .iter()
                .map(|c| CompareRecord {
                    frequency: c.frequency.as_str(),
                    periods_per_year: c.periods_per_year,
                    months: c.summary.months,
                    total_interest: c.summary.total_interest,
                    final_balance: c.summary.final_balance,
                    return_pct: c.summary.return_pct,
                })
                .collect();
            print_csv(&records)?;
        }
        OutputFormat::Minimal => {
            // ties go to the earliest (most frequent) reinvestment
            let best = comparison.iter().reduce(|best, c| {
                if c.summary.final_balance > best.summary.final_balance {
                    c
                } else {
                    best
                }
            });
            if let Some(best) = best {
                println!("{}", best.frequency.as_str());
            }
        }
    }

    Ok(())
}
