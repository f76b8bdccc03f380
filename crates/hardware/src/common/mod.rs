//! Common types and constants shared by the UART model.
//!
//! This module provides the building blocks used across the crate. It includes:
//! 1. **Constants:** Register offsets, status bits, reset values and FIFO geometry.
//! 2. **Error Handling:** The configuration error type.

/// Register map, status bits and FIFO geometry.
pub mod constants;

/// Error types for configuration loading.
pub mod error;

pub use constants::{FIFO_CAPACITY, RX_EMPTY_SENTINEL, TX_EMPTY_SENTINEL};
pub use error::ConfigError;
