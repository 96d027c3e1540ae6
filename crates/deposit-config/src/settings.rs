//! Persisted calculator settings.
//!
//! Settings hold the last-used (or preferred) raw inputs plus display
//! preferences. They are stored as JSON, or TOML when the path ends in
//! `.toml`. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use deposit_core::types::{
    AnnualInterestRate, DurationMonths, PrincipalAmount, ReinvestmentFrequency,
};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::inputs::DepositInputs;

/// Output formats a settings file may name.
pub const OUTPUT_FORMATS: [&str; 4] = ["table", "json", "csv", "minimal"];

/// Calculator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    /// Default principal in dollars.
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Default annual rate as a percentage.
    #[serde(default = "default_annual_rate")]
    pub annual_rate: f64,

    /// Default term in months.
    #[serde(default = "default_duration_months")]
    pub duration_months: f64,

    /// Default reinvestment frequency.
    #[serde(default)]
    pub frequency: ReinvestmentFrequency,

    /// Default output format.
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Whether to colour status lines.
    #[serde(default = "default_use_colors")]
    pub use_colors: bool,
}

fn default_principal() -> f64 {
    DepositInputs::default().principal
}

fn default_annual_rate() -> f64 {
    DepositInputs::default().annual_rate
}

fn default_duration_months() -> f64 {
    DepositInputs::default().duration_months
}

fn default_output_format() -> String {
    "table".to_string()
}

fn default_use_colors() -> bool {
    true
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            principal: default_principal(),
            annual_rate: default_annual_rate(),
            duration_months: default_duration_months(),
            frequency: ReinvestmentFrequency::default(),
            output_format: default_output_format(),
            use_colors: default_use_colors(),
        }
    }
}

impl CalculatorSettings {
    /// Loads settings from `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            log::debug!("no settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings: Self = if is_toml(path) {
            toml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Writes settings to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = if is_toml(path) {
            toml::to_string_pretty(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        std::fs::write(path, content)?;
        log::debug!("saved settings to {}", path.display());
        Ok(())
    }

    /// Returns the stored inputs.
    #[must_use]
    pub fn inputs(&self) -> DepositInputs {
        DepositInputs::new(
            self.principal,
            self.annual_rate,
            self.duration_months,
            self.frequency,
        )
    }

    /// Returns the value stored under `key`, rendered as text.
    #[must_use]
    pub fn get(&self, key: SettingKey) -> String {
        match key {
            SettingKey::Principal => self.principal.to_string(),
            SettingKey::AnnualRate => self.annual_rate.to_string(),
            SettingKey::DurationMonths => self.duration_months.to_string(),
            SettingKey::Frequency => self.frequency.as_str().to_string(),
            SettingKey::OutputFormat => self.output_format.clone(),
            SettingKey::UseColors => self.use_colors.to_string(),
        }
    }

    /// Parses, validates and stores `value` under `key`.
    ///
    /// Numeric inputs go through the same validators the calculator uses.
    pub fn set(&mut self, key: SettingKey, value: &str) -> ConfigResult<()> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: key.as_str().to_string(),
            value: value.to_string(),
            reason,
        };

        match key {
            SettingKey::Principal => {
                let raw = parse_f64(value).map_err(invalid)?;
                self.principal = PrincipalAmount::new(raw)
                    .map_err(|e| invalid(e.to_string()))?
                    .value();
            }
            SettingKey::AnnualRate => {
                let raw = parse_f64(value).map_err(invalid)?;
                self.annual_rate = AnnualInterestRate::new(raw)
                    .map_err(|e| invalid(e.to_string()))?
                    .value();
            }
            SettingKey::DurationMonths => {
                let raw = parse_f64(value).map_err(invalid)?;
                self.duration_months = DurationMonths::new_whole(raw)
                    .map_err(|e| invalid(e.to_string()))?
                    .value();
            }
            SettingKey::Frequency => {
                self.frequency = value.parse().map_err(|e: deposit_core::DepositError| {
                    invalid(e.to_string())
                })?;
            }
            SettingKey::OutputFormat => {
                let format = value.to_lowercase();
                if !OUTPUT_FORMATS.contains(&format.as_str()) {
                    return Err(invalid(
                        "Use table, json, csv, or minimal.".to_string(),
                    ));
                }
                self.output_format = format;
            }
            SettingKey::UseColors => {
                self.use_colors = match value.to_lowercase().as_str() {
                    "true" | "1" | "yes" => true,
                    "false" | "0" | "no" => false,
                    _ => return Err(invalid("Use true or false.".to_string())),
                };
            }
        }
        Ok(())
    }

    /// Restores the default for one key.
    pub fn reset(&mut self, key: SettingKey) {
        let defaults = Self::default();
        match key {
            SettingKey::Principal => self.principal = defaults.principal,
            SettingKey::AnnualRate => self.annual_rate = defaults.annual_rate,
            SettingKey::DurationMonths => self.duration_months = defaults.duration_months,
            SettingKey::Frequency => self.frequency = defaults.frequency,
            SettingKey::OutputFormat => self.output_format = defaults.output_format,
            SettingKey::UseColors => self.use_colors = defaults.use_colors,
        }
    }
}

impl Validate for CalculatorSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.inputs().validate();
        if !OUTPUT_FORMATS.contains(&self.output_format.as_str()) {
            errors.push(ValidationError::with_rule(
                "output_format",
                format!("Unknown output format: {}", self.output_format),
                "one_of",
            ));
        }
        errors
    }
}

/// Settings keys addressable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Default principal
    Principal,
    /// Default annual rate
    AnnualRate,
    /// Default term
    DurationMonths,
    /// Default reinvestment frequency
    Frequency,
    /// Default output format
    OutputFormat,
    /// Whether to use colors
    UseColors,
}

impl SettingKey {
    /// Looks a key up by name or short alias.
    pub fn parse(s: &str) -> ConfigResult<Self> {
        match s.to_lowercase().as_str() {
            "principal" => Ok(Self::Principal),
            "annual_rate" | "rate" => Ok(Self::AnnualRate),
            "duration_months" | "months" | "duration" => Ok(Self::DurationMonths),
            "frequency" => Ok(Self::Frequency),
            "output_format" | "format" => Ok(Self::OutputFormat),
            "use_colors" | "colors" => Ok(Self::UseColors),
            _ => Err(ConfigError::UnknownKey { key: s.to_string() }),
        }
    }

    /// Returns the canonical key name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Principal => "principal",
            Self::AnnualRate => "annual_rate",
            Self::DurationMonths => "duration_months",
            Self::Frequency => "frequency",
            Self::OutputFormat => "output_format",
            Self::UseColors => "use_colors",
        }
    }

    /// Returns a one-line description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Principal => "Default principal in dollars (1 to 10,000,000)",
            Self::AnnualRate => "Default annual rate in percent (0 to 15)",
            Self::DurationMonths => "Default term in whole months (3 to 60)",
            Self::Frequency => "Default reinvestment (monthly, quarterly, annually, at-maturity)",
            Self::OutputFormat => "Default output format (table, json, csv, minimal)",
            Self::UseColors => "Enable colored output (true, false)",
        }
    }

    /// Returns every key in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Principal,
            Self::AnnualRate,
            Self::DurationMonths,
            Self::Frequency,
            Self::OutputFormat,
            Self::UseColors,
        ]
    }
}

/// Returns the default settings path, `<config dir>/deposit/config.json`.
pub fn default_settings_path() -> ConfigResult<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("deposit").join("config.json"))
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

fn parse_f64(value: &str) -> Result<f64, String> {
    value
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .map_err(|_| "Must be a number.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = CalculatorSettings::default();
        assert!(settings.is_valid());
        assert_eq!(settings.get(SettingKey::DurationMonths), "12");
        assert_eq!(settings.get(SettingKey::Frequency), "monthly");
    }

    #[test]
    fn test_set_runs_validators() {
        let mut settings = CalculatorSettings::default();
        settings.set(SettingKey::Principal, "50,000").unwrap();
        assert_eq!(settings.principal, 50_000.0);

        let err = settings.set(SettingKey::AnnualRate, "16").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for annual_rate: 16. \
             Interest rate must be between 0.00% and 15.00%. Received: 16.00%"
        );

        assert!(settings.set(SettingKey::DurationMonths, "6.5").is_err());
        assert!(settings.set(SettingKey::UseColors, "maybe").is_err());
        assert!(settings.set(SettingKey::OutputFormat, "xml").is_err());
    }

    #[test]
    fn test_reset_restores_default() {
        let mut settings = CalculatorSettings::default();
        settings.set(SettingKey::Frequency, "quarterly").unwrap();
        settings.reset(SettingKey::Frequency);
        assert_eq!(settings.frequency, ReinvestmentFrequency::Monthly);
    }

    #[test]
    fn test_key_aliases() {
        assert_eq!(SettingKey::parse("rate").unwrap(), SettingKey::AnnualRate);
        assert_eq!(SettingKey::parse("MONTHS").unwrap(), SettingKey::DurationMonths);
        assert!(matches!(
            SettingKey::parse("currency"),
            Err(ConfigError::UnknownKey { .. })
        ));
        for key in SettingKey::all() {
            assert_eq!(SettingKey::parse(key.as_str()).unwrap(), *key);
        }
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: CalculatorSettings =
            serde_json::from_str(r#"{"principal": 2500, "frequency": "annually"}"#).unwrap();
        assert_eq!(settings.principal, 2500.0);
        assert_eq!(settings.frequency, ReinvestmentFrequency::Annually);
        assert_eq!(settings.annual_rate, 1.2);
        assert_eq!(settings.output_format, "table");
    }
}
