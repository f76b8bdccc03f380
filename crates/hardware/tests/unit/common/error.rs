//! # Configuration Error Tests
//!
//! Checks the messages and source chains of `ConfigError`.

use std::error::Error;
use std::io;
use std::path::PathBuf;
use uartsim_core::common::ConfigError;

#[test]
fn test_io_error_names_the_path() {
    let err = ConfigError::Io {
        path: PathBuf::from("/nonexistent/uart.json"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };
    let msg = err.to_string();
    assert!(msg.contains("/nonexistent/uart.json"), "{msg}");
    assert!(msg.contains("no such file"), "{msg}");
    assert!(err.source().is_some());
}

#[test]
fn test_parse_error_wraps_serde() {
    let serde_err = serde_json::from_str::<u8>("not json").unwrap_err();
    let err = ConfigError::from(serde_err);
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse config"));
}

#[test]
fn test_invalid_error_message() {
    let err = ConfigError::Invalid("window_size must be non-zero".into());
    assert_eq!(err.to_string(), "invalid config: window_size must be non-zero");
    assert!(err.source().is_none());
}
