//! # Unit Components
//!
//! This module serves as the central hub for the UART unit tests.


/// Unit tests for UART configuration loading, defaults and validation.
pub mod config;
