//! Stored 16550 registers.
//!
//! Only the registers that hold state live here. The Line Status Register is
//! never stored: it is computed from FIFO occupancy on every read. The FIFO
//! Control Register is recorded but has no effect on the FIFOs, which are
//! always enabled at a fixed depth.

use crate::common::constants::IIR_NO_INTERRUPT;

/// Byte-wide control and status registers of a 16550 UART.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterSet {
    /// Interrupt Enable Register.
    pub ier: u8,
    /// Interrupt Identification Register.
    pub iir: u8,
    /// FIFO Control Register (write-only on hardware).
    pub fcr: u8,
    /// Line Control Register.
    pub lcr: u8,
    /// Modem Control Register.
    pub mcr: u8,
    /// Modem Status Register (read-only to software).
    pub msr: u8,
    /// Scratch Register.
    pub scr: u8,
}

impl RegisterSet {
    /// Power-on register values: everything zero except IIR, which reports
    /// "no interrupt pending".
    pub const POWER_ON: Self = Self {
        ier: 0,
        iir: IIR_NO_INTERRUPT,
        fcr: 0,
        lcr: 0,
        mcr: 0,
        msr: 0,
        scr: 0,
    };

    /// Restores the power-on values.
    pub fn reset(&mut self) {
        *self = Self::POWER_ON;
    }
}

impl Default for RegisterSet {
    fn default() -> Self {
        Self::POWER_ON
    }
}
