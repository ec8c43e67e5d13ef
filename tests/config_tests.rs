use budget_tracker::{
    config::{Config, ConfigManager},
    errors::ConfigError,
    ledger::DEFAULT_WARN_THRESHOLD,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let config = ConfigManager::with_base_dir(dir.path().join("nested"))
        .load()
        .unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.warn_threshold, DEFAULT_WARN_THRESHOLD);
    assert_eq!(config.currency_symbol, "$");
}

#[test]
fn save_then_load_preserves_values_and_cleans_up_tmp() {
    let dir = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(dir.path().join("home"));
    let config = Config {
        currency_symbol: "€".into(),
        warn_threshold: 250.0,
    };
    manager.save(&config).unwrap();

    assert_eq!(manager.load().unwrap(), config);
    let leftovers: Vec<_> = fs::read_dir(dir.path().join("home"))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn corrupt_or_invalid_files_are_errors() {
    let dir = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(dir.path());

    fs::write(manager.path(), "{ not json").unwrap();
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));

    fs::write(manager.path(), r#"{"warn_threshold": -5}"#).unwrap();
    assert!(matches!(manager.load(), Err(ConfigError::Invalid(_))));
}
