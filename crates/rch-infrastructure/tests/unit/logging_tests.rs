//! Logging Tests

use rch_infrastructure::constants::DEFAULT_LOG_LEVEL;
use rch_infrastructure::logging::{LoggingConfig, filter_directives, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
    assert!(config.registry_level.is_none());
}

#[test]
fn test_filter_directives_use_global_level() {
    let config = LoggingConfig {
        level: "WARNING".to_string(),
        ..LoggingConfig::default()
    };

    assert_eq!(filter_directives(&config).unwrap(), "warn");
}

#[test]
fn test_filter_directives_raise_registry_targets() {
    let config = LoggingConfig {
        registry_level: Some("debug".to_string()),
        ..LoggingConfig::default()
    };

    assert_eq!(
        filter_directives(&config).unwrap(),
        "info,rch_application=debug,rch_providers=debug"
    );
}

#[test]
fn test_filter_directives_reject_unknown_registry_level() {
    let config = LoggingConfig {
        registry_level: Some("chatty".to_string()),
        ..LoggingConfig::default()
    };

    assert!(filter_directives(&config).is_err());
}
