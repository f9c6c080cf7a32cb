//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use skirmish::config::AppConfig;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SKIRMISH_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("SKIRMISH_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_numeric_env_override() {
    std::env::set_var("SKIRMISH_SIMULATION__ENTITY_CAPACITY", "128");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.simulation.entity_capacity, 128);
    std::env::remove_var("SKIRMISH_SIMULATION__ENTITY_CAPACITY");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("SKIRMISH_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Skirmish");
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.window.height, 720);
    assert_eq!(config.simulation.entity_capacity, 64);
}

#[test]
#[serial]
fn test_missing_config_dir_falls_back_to_defaults() {
    let config = AppConfig::load_from("no-such-dir").unwrap();
    assert_eq!(config.window.title, AppConfig::default().window.title);
}
