//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands::{CompareArgs, ConfigArgs, ScheduleArgs};

/// Deposit - term deposit compound-interest calculator
#[derive(Parser)]
#[command(name = "deposit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the stored setting)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Settings file (JSON, or TOML when the name ends in .toml)
    #[arg(short, long, env = "DEPOSIT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the month-by-month schedule for one deposit
    Schedule(ScheduleArgs),

    /// Compare end-of-term results across reinvestment frequencies
    Compare(CompareArgs),

    /// Manage stored settings
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

impl OutputFormat {
    /// Parses a stored format name, falling back to the table format.
    pub fn from_setting(name: &str) -> Self {
        <Self as ValueEnum>::from_str(name, true).unwrap_or_default()
    }
}
