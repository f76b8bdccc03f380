//! Configuration error definitions.
//!
//! The register file and FIFOs never fail: every boundary condition degrades to a
//! sentinel value or a silent drop. The only fallible surface in this crate is
//! loading and validating a [`UartConfig`](crate::config::UartConfig), and this
//! module defines the error type for it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a UART configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration text was not valid JSON for [`UartConfig`](crate::config::UartConfig).
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but describes an unusable device.
    #[error("invalid config: {0}")]
    Invalid(String),
}
