//! 16550 UART model for simulation and testbench harnesses.
//!
//! This crate implements a polled, register-accurate 16550-compatible UART with the following:
//! 1. **Register File:** Offset-dispatched reads and writes of the eight UART registers.
//! 2. **FIFOs:** Fixed 16-slot receive and transmit buffers with overflow-drop semantics.
//! 3. **Lifecycle:** Explicit initialize / teardown with optional preloaded receive data.
//! 4. **Integration:** The `Device` MMIO trait, pluggable output sinks and a diagnostic clock.
//!
//! # Examples
//!
//! ```
//! use uartsim_core::config::UartConfig;
//! use uartsim_core::soc::devices::uart::SharedBufferSink;
//! use uartsim_core::Uart;
//!
//! let console = SharedBufferSink::new();
//! let config = UartConfig { preload: "ab".into(), ..UartConfig::default() };
//! let mut uart = Uart::detached(&config).with_sink(Box::new(console.clone()));
//! uart.initialize();
//!
//! assert_eq!(uart.read_reg(0x00), b'a');
//! uart.write_reg(0x00, b'!');
//! assert_eq!(console.contents(), b"!");
//! ```

/// Common types and constants (register map, FIFO geometry, errors).
pub mod common;
/// UART configuration (defaults, JSON loading, validation).
pub mod config;
/// Peripheral models and the MMIO device trait.
pub mod soc;

/// Configuration type; use `UartConfig::default()` or load from JSON.
pub use crate::config::UartConfig;
/// The UART peripheral.
pub use crate::soc::devices::Uart;
