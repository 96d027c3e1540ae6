//! Schedule command implementation.
//!
//! Prints one row per month of the term.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use deposit_config::CalculatorSettings;
use deposit_schedule::{CalculationResult, ScheduleSummary};

use crate::cli::OutputFormat;
use crate::commands::TermArgs;
use crate::output::{money, percent, print_csv, print_header, print_info, print_json, print_table};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub term: TermArgs,
}

/// A schedule row formatted for a table.
#[derive(Debug, Serialize, Tabled)]
pub struct ScheduleRow {
    #[tabled(rename = "Month")]
    pub month: u32,
    #[tabled(rename = "Rate")]
    pub rate: String,
    #[tabled(rename = "Interest")]
    pub interest: String,
    #[tabled(rename = "Balance")]
    pub balance: String,
}

impl From<&CalculationResult> for ScheduleRow {
    fn from(row: &CalculationResult) -> Self {
        Self {
            month: row.month,
            rate: percent(row.annual_rate),
            interest: money(row.interest),
            balance: money(row.balance),
        }
    }
}

/// Execute the schedule command.
pub fn execute(
    args: ScheduleArgs,
    settings: &CalculatorSettings,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let terms = args.term.resolve(settings)?;
    let rows = terms.schedule();
    tracing::info!(months = rows.len(), frequency = %terms.frequency, "schedule computed");

    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header(&format!(
                    "{} at {} for {}, reinvested {}",
                    terms.principal,
                    terms.annual_rate,
                    terms.duration,
                    terms.frequency.as_str()
                ));
            }
            let display: Vec<ScheduleRow> = rows.iter().map(ScheduleRow::from).collect();
            print_table(&display)?;
            if !quiet {
                if let Some(summary) = ScheduleSummary::from_rows(terms.principal, &rows) {
                    print_info(&format!(
                        "Total interest {} ({} of principal), final balance {}",
                        money(summary.total_interest),
                        percent(summary.return_pct),
                        money(summary.final_balance)
                    ));
                }
            }
        }
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Csv => print_csv(&rows)?,
        OutputFormat::Minimal => {
            if let Some(last) = rows.last() {
                println!("{:.2}", last.balance);
            }
        }
    }

    Ok(())
}
