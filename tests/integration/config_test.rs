//! Configuration loading tests

use std::io::Write;
use venue_tca::config::Config;

#[test]
fn test_example_config_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.market.time_periods, 100);
    assert_eq!(config.engine.execution_interval, 10);
    assert!(config.batch.seed.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[engine]\nwindow_length = 7\n\n[batch]\nseed = 3").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.engine.window_length, 7);
    assert_eq!(config.batch.seed, Some(3));
    assert_eq!(config.market.num_venues, 3);
}

#[test]
fn test_load_rejects_bad_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[engine]\nwindow_length = \"five\"").unwrap();
    assert!(Config::load(file.path()).is_err());
}
