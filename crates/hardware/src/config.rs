//! Configuration for the UART model.
//!
//! This module defines the configuration structure used to parameterize a [`Uart`](crate::Uart). It provides:
//! 1. **Defaults:** Baseline window placement, console routing and heartbeat throttle.
//! 2. **Structure:** A flat, fully-defaulted [`UartConfig`] deserializable from JSON.
//! 3. **Loading:** Helpers to parse from a string or a file, with validation.
//!
//! Configuration is supplied as JSON by the harness, or use `UartConfig::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::ConfigError;
use crate::common::constants::{REGISTER_SPAN, WINDOW_SIZE};

/// Default configuration constants for the UART.
mod defaults {
    /// Base address of the UART MMIO window.
    pub const BASE_ADDR: u64 = 0x1000_0000;

    /// Size of the UART MMIO window (256 bytes, of which 8 are decoded).
    pub const WINDOW_SIZE: u64 = super::WINDOW_SIZE;

    /// Minimum interval between diagnostic heartbeats on the byte-level path (1 minute).
    pub const HEARTBEAT_INTERVAL_MS: u64 = 60 * 1000;
}

/// UART configuration.
///
/// Every field is optional in JSON; missing fields take the values of
/// [`UartConfig::default`].
///
/// # Examples
///
/// ```
/// use uartsim_core::config::UartConfig;
///
/// let config = UartConfig::from_json(r#"{ "preload": "root\n", "to_stderr": true }"#).unwrap();
/// assert_eq!(config.preload, "root\n");
/// assert!(config.to_stderr);
/// assert_eq!(config.base_addr, 0x1000_0000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UartConfig {
    /// Base physical address of the device window.
    #[serde(default = "UartConfig::default_base_addr")]
    pub base_addr: u64,

    /// Size of the device window in bytes.
    #[serde(default = "UartConfig::default_window_size")]
    pub window_size: u64,

    /// Bytes pushed into the receive FIFO on initialization (bring-up input).
    /// Anything past the usable FIFO depth is dropped.
    #[serde(default)]
    pub preload: String,

    /// Route console output to stderr instead of stdout.
    #[serde(default)]
    pub to_stderr: bool,

    /// Minimum milliseconds between diagnostic heartbeats.
    #[serde(default = "UartConfig::default_heartbeat_interval_ms")]
    pub heartbeat_interval_ms: u64,
}

impl UartConfig {
    fn default_base_addr() -> u64 {
        defaults::BASE_ADDR
    }

    fn default_window_size() -> u64 {
        defaults::WINDOW_SIZE
    }

    fn default_heartbeat_interval_ms() -> u64 {
        defaults::HEARTBEAT_INTERVAL_MS
    }

    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`UartConfig::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that the configuration describes a usable device.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a window smaller than the eight
    /// decoded registers, a window that wraps the address space, or a zero
    /// heartbeat interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size < REGISTER_SPAN {
            return Err(ConfigError::Invalid(format!(
                "window_size {:#x} is smaller than the {REGISTER_SPAN} register span",
                self.window_size
            )));
        }
        if self.base_addr.checked_add(self.window_size).is_none() {
            return Err(ConfigError::Invalid(format!(
                "window {:#x}+{:#x} overflows the address space",
                self.base_addr, self.window_size
            )));
        }
        if self.heartbeat_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "heartbeat_interval_ms must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Returns the preload sequence as raw bytes.
    pub fn preload_bytes(&self) -> &[u8] {
        self.preload.as_bytes()
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            base_addr: Self::default_base_addr(),
            window_size: Self::default_window_size(),
            preload: String::new(),
            to_stderr: false,
            heartbeat_interval_ms: Self::default_heartbeat_interval_ms(),
        }
    }
}
