//! Environment loading for BotConfig and PortalConfig.

use gradecard_bot::alias::AliasState;
use gradecard_bot::config::DEFAULT_LOG_FILE;
use gradecard_bot::{BotConfig, PortalConfig};
use serial_test::serial;
use std::env;

fn clear_env() {
    for key in [
        "BOT_TOKEN",
        "TELEGRAM_BOT_TOKEN",
        "TELEGRAM_API_URL",
        "TELOXIDE_API_URL",
        "LOG_FILE",
        "PORTAL_BASE_URL",
        "PORTAL_PROGRAM",
        "PORTAL_RESULT_TYPE",
        "ENROLLMENT_ALIASES",
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_load_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.telegram.bot_token, "test_token");
    assert!(config.telegram.telegram_api_url.is_none());
    assert_eq!(config.log_file(), DEFAULT_LOG_FILE);
    assert_eq!(config.portal, PortalConfig::default());
    assert_eq!(config.alias_state(), AliasState::Missing);
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_load_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");
    env::set_var("LOG_FILE", "/tmp/gradecard.log");
    env::set_var("PORTAL_BASE_URL", "http://localhost:9000");
    env::set_var("PORTAL_PROGRAM", "MCA");
    env::set_var("PORTAL_RESULT_TYPE", "2");
    env::set_var("ENROLLMENT_ALIASES", r#"{"john": 75000123}"#);

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.telegram.bot_token, "override_token");
    assert_eq!(config.log_file(), "/tmp/gradecard.log");
    assert_eq!(config.portal.base_url, "http://localhost:9000");
    assert_eq!(config.portal.program, "MCA");
    assert_eq!(config.portal.result_type, "2");
    match config.alias_state() {
        AliasState::Loaded(table) => assert_eq!(table.get("JOHN"), Some(75000123)),
        other => panic!("expected loaded aliases, got {:?}", other),
    }

    clear_env();
}

#[test]
#[serial]
fn test_malformed_aliases_do_not_fail_load() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("ENROLLMENT_ALIASES", "{'JOHN': 75000123}");

    let config = BotConfig::load(None).unwrap();

    assert!(matches!(config.alias_state(), AliasState::Invalid(_)));
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_missing_token_fails_load() {
    clear_env();
    assert!(BotConfig::load(None).is_err());
}

#[test]
#[serial]
fn test_invalid_telegram_api_url_fails_validation() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}
