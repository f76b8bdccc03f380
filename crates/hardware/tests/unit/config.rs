//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, file loading and
//! validation.

use pretty_assertions::assert_eq;
use std::io::Write;
use uartsim_core::common::ConfigError;
use uartsim_core::config::UartConfig;

#[test]
fn test_config_default() {
    let config = UartConfig::default();
    assert_eq!(config.base_addr, 0x1000_0000);
    assert_eq!(config.window_size, 0x100);
    assert_eq!(config.preload, "");
    assert!(!config.to_stderr);
    assert_eq!(config.heartbeat_interval_ms, 60_000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_matches_default() {
    let config = UartConfig::from_json("{}").unwrap();
    assert_eq!(config, UartConfig::default());
}

#[test]
fn test_json_overrides() {
    let json = r#"{
        "base_addr": 268435456,
        "window_size": 8,
        "preload": "root\n",
        "to_stderr": true,
        "heartbeat_interval_ms": 500
    }"#;
    let config = UartConfig::from_json(json).unwrap();
    assert_eq!(config.base_addr, 0x1000_0000);
    assert_eq!(config.window_size, 8);
    assert_eq!(config.preload_bytes(), b"root\n");
    assert!(config.to_stderr);
    assert_eq!(config.heartbeat_interval_ms, 500);
}

#[test]
fn test_unknown_field_rejected() {
    let err = UartConfig::from_json(r#"{ "fifo_depth": 64 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "{err}");
}

#[test]
fn test_malformed_json_rejected() {
    let err = UartConfig::from_json("{ preload: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_zero_window_rejected() {
    let err = UartConfig::from_json(r#"{ "window_size": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_wrapping_window_rejected() {
    let config = UartConfig {
        base_addr: u64::MAX - 4,
        window_size: 0x100,
        ..UartConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_zero_heartbeat_rejected() {
    let err = UartConfig::from_json(r#"{ "heartbeat_interval_ms": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("heartbeat_interval_ms"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "preload": "ls\n" }"#).unwrap();
    let config = UartConfig::from_file(file.path()).unwrap();
    assert_eq!(config.preload, "ls\n");
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = UartConfig::from_file(&path).unwrap_err();
    match err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other}"),
    }
}

#[test]
fn test_window_smaller_than_register_span_rejected() {
    let json = r#"{ "base_addr": 18446744073709551614, "window_size": 1 }"#;
    let err = UartConfig::from_json(json).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    assert!(err.to_string().contains("register span"), "{err}");
}

#[test]
fn test_window_exactly_register_span_accepted() {
    let config = UartConfig::from_json(r#"{ "window_size": 8 }"#).unwrap();
    assert_eq!(config.window_size, 8);

    let top = UartConfig {
        base_addr: u64::MAX - 8,
        window_size: 8,
        ..UartConfig::default()
    };
    assert!(top.validate().is_ok());
    let too_small = UartConfig {
        window_size: 7,
        ..UartConfig::default()
    };
    assert!(matches!(too_small.validate(), Err(ConfigError::Invalid(_))));
}
