//! Deposit CLI - Command-line interface for the term-deposit calculator.
//!
//! # Usage
//!
//! ```bash
//! # Month-by-month schedule
//! deposit schedule --principal 10000 --rate 1.2 --months 12 --frequency quarterly
//!
//! # End-of-term result under every reinvestment frequency
//! deposit compare --principal 10000 --rate 1.2 --months 24
//!
//! # Store defaults for later runs
//! deposit config set rate 2.5
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands, OutputFormat};
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<CliError>() {
                Some(CliError::InvalidInputs(messages)) => {
                    for message in messages {
                        output::print_error(message);
                    }
                }
                _ => output::print_error(&format!("{err:#}")),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Schedule(args) => {
            let settings = commands::load_settings(config)?;
            let format = resolve_format(cli.format, &settings);
            commands::schedule::execute(args, &settings, format, cli.quiet)?;
        }
        Commands::Compare(args) => {
            let settings = commands::load_settings(config)?;
            let format = resolve_format(cli.format, &settings);
            commands::compare::execute(args, &settings, format, cli.quiet)?;
        }
        Commands::Config(args) => {
            commands::config::execute(args, config, cli.format.unwrap_or_default())?;
        }
    }

    Ok(())
}

/// Picks the explicit `--format`, else the stored one, and applies the
/// colour preference.
fn resolve_format(
    explicit: Option<OutputFormat>,
    settings: &deposit_config::CalculatorSettings,
) -> OutputFormat {
    if !settings.use_colors {
        colored::control::set_override(false);
    }
    explicit.unwrap_or_else(|| OutputFormat::from_setting(&settings.output_format))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
