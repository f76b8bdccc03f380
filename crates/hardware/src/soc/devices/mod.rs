//! Memory-Mapped IO Devices.
//!
//! This module contains the peripheral models that can be attached to a
//! harness bus. Currently that is the 16550-compatible UART.

/// UART 16550-compatible serial port.
pub mod uart;

pub use uart::{FifoStatus, Uart, UartState};

pub use crate::soc::traits::Device;
