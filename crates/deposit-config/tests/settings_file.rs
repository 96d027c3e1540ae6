//! Settings persistence round trips through real files.

use deposit_config::{CalculatorSettings, ConfigError, SettingKey, Validate};
use deposit_core::ReinvestmentFrequency;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let settings = CalculatorSettings::load(&dir.path().join("absent.json")).unwrap();
    assert_eq!(settings, CalculatorSettings::default());
}

#[test]
fn json_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let mut settings = CalculatorSettings::default();
    settings.set(SettingKey::Principal, "75000").unwrap();
    settings.set(SettingKey::Frequency, "at-maturity").unwrap();
    settings.save(&path).unwrap();

    let loaded = CalculatorSettings::load(&path).unwrap();
    assert_eq!(loaded.principal, 75_000.0);
    assert_eq!(loaded.frequency, ReinvestmentFrequency::AtMaturity);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"at-maturity\""));
}

#[test]
fn toml_selected_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deposit.toml");
    std::fs::write(
        &path,
        "principal = 2000.0\nannual_rate = 4.5\nduration_months = 24.0\nfrequency = \"quarterly\"\n",
    )
    .unwrap();

    let settings = CalculatorSettings::load(&path).unwrap();
    assert_eq!(settings.annual_rate, 4.5);
    assert_eq!(settings.frequency, ReinvestmentFrequency::Quarterly);
    assert!(settings.is_valid());

    settings.save(&path).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().contains("output_format = \"table\""));
}

#[test]
fn hand_edited_bad_values_load_but_fail_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"principal": 0, "duration_months": 80}"#).unwrap();

    let settings = CalculatorSettings::load(&path).unwrap();
    let errors = settings.validate();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, "principal");
    assert_eq!(
        errors[1].message,
        "Duration must be between 3 and 60 months. Received: 80 months"
    );
}

#[test]
fn malformed_file_is_a_deserialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        CalculatorSettings::load(&path),
        Err(ConfigError::Deserialization(_))
    ));
}
