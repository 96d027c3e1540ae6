//! Config command implementation.
//!
//! Manages stored calculator settings.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::Path;

use deposit_config::{CalculatorSettings, SettingKey, Validate};

use crate::cli::OutputFormat;
use crate::commands::{load_settings, settings_path};
use crate::output::{
    print_csv, print_header, print_info, print_success, print_table, print_warning, KeyValue,
};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(config, format),
        ConfigCommand::Get(get_args) => execute_get(get_args, config, format),
        ConfigCommand::Set(set_args) => execute_set(set_args, config),
        ConfigCommand::List => execute_list(format),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args, config),
        ConfigCommand::Path => execute_path(config),
    }
}

/// Show current configuration.
fn execute_show(config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let settings = load_settings(config)?;
    let results: Vec<KeyValue> = SettingKey::all()
        .iter()
        .map(|key| KeyValue::new(key.as_str(), settings.get(*key)))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            print_table(&results)?;
            for problem in settings.validate() {
                print_warning(&problem.message);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        OutputFormat::Csv => {
            print_csv(&results)?;
        }
        OutputFormat::Minimal => {
            for kv in &results {
                println!("{}={}", kv.key, kv.value);
            }
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(args: GetArgs, config: Option<&Path>, format: OutputFormat) -> Result<()> {
    let key = SettingKey::parse(&args.key)?;
    let value = load_settings(config)?.get(key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key.as_str(), value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            println!("{}", value);
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: SetArgs, config: Option<&Path>) -> Result<()> {
    let key = SettingKey::parse(&args.key)?;
    let path = settings_path(config)?;

    let mut settings = CalculatorSettings::load(&path)?;
    settings.set(key, &args.value)?;
    settings.save(&path)?;

    tracing::info!(key = key.as_str(), path = %path.display(), "setting stored");
    print_success(&format!("Set {} = {}", key.as_str(), settings.get(key)));
    Ok(())
}

/// List available configuration keys.
fn execute_list(format: OutputFormat) -> Result<()> {
    let defaults = CalculatorSettings::default();

    match format {
        OutputFormat::Table => {
            let results: Vec<KeyValue> = SettingKey::all()
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", key.description(), defaults.get(*key)),
                    )
                })
                .collect();
            print_header("Available Configuration Keys");
            print_table(&results)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = SettingKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": defaults.get(*key)
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(["key", "description", "default"])?;
            for key in SettingKey::all() {
                let default = defaults.get(*key);
                wtr.write_record([key.as_str(), key.description(), default.as_str()])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            for key in SettingKey::all() {
                println!("{}", key.as_str());
            }
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(args: ResetArgs, config: Option<&Path>) -> Result<()> {
    let path = settings_path(config)?;

    if args.all {
        CalculatorSettings::default().save(&path)?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key_str) = args.key {
        let key = SettingKey::parse(&key_str)?;
        let mut settings = CalculatorSettings::load(&path)?;
        settings.reset(key);
        settings.save(&path)?;
        print_success(&format!("Reset {} to default ({})", key.as_str(), settings.get(key)));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(config: Option<&Path>) -> Result<()> {
    let path = settings_path(config)?;
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}
