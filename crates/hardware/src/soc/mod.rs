//! System-on-Chip (SoC) Components.
//!
//! This module organizes the peripherals a harness places on its bus and the
//! device trait they implement.

/// Memory-mapped I/O device implementations.
pub mod devices;

/// Device trait definitions for MMIO access.
pub mod traits;

pub use devices::Uart;
pub use traits::Device;
