//! UART Register Map Constants.
//!
//! This module defines the constants shared by the register file and the FIFO engine. It includes:
//! 1. **Register Offsets:** Byte offsets of the eight 16550 registers within the device window.
//! 2. **Status Bits:** Line Status Register bit positions.
//! 3. **Reset Values:** Power-on defaults for the stored registers.
//! 4. **FIFO Geometry:** Buffer capacity and the empty-dequeue sentinels.

/// Receiver Buffer Register (read) / Transmitter Holding Register (write).
pub const REG_RBR_THR: u8 = 0x00;

/// Interrupt Enable Register.
pub const REG_IER: u8 = 0x01;

/// Interrupt Identification Register (read) / FIFO Control Register (write).
pub const REG_IIR_FCR: u8 = 0x02;

/// Line Control Register.
pub const REG_LCR: u8 = 0x03;

/// Modem Control Register.
pub const REG_MCR: u8 = 0x04;

/// Line Status Register (computed on read).
pub const REG_LSR: u8 = 0x05;

/// Modem Status Register (read-only).
pub const REG_MSR: u8 = 0x06;

/// Scratch Register.
pub const REG_SCR: u8 = 0x07;

/// Line Status Register: receive data ready.
pub const LSR_DATA_READY: u8 = 0x01;

/// Line Status Register: Transmitter Holding Register empty.
pub const LSR_THRE: u8 = 0x20;

/// Line Status Register: transmitter FIFO and shift register empty.
pub const LSR_TEMT: u8 = 0x40;

/// Transmit is instantaneous, so both transmitter bits are always asserted.
pub const LSR_TX_IDLE: u8 = LSR_THRE | LSR_TEMT;

/// Interrupt Identification Register: no interrupt pending.
pub const IIR_NO_INTERRUPT: u8 = 0x01;

/// Value returned for reads of offsets outside the register map.
pub const UNMAPPED_READ: u8 = 0xFF;

/// Number of slots in each FIFO. One slot is reserved, so 15 bytes are usable.
pub const FIFO_CAPACITY: usize = 16;

/// Byte returned when the receive FIFO is read while empty.
pub const RX_EMPTY_SENTINEL: u8 = 0xFF;

/// Byte returned when the transmit FIFO is drained while empty.
pub const TX_EMPTY_SENTINEL: u8 = 0x00;

/// Number of decoded register offsets; a device window must cover at least this many bytes.
pub const REGISTER_SPAN: u64 = 8;

/// Default size of the device's MMIO window in bytes.
pub const WINDOW_SIZE: u64 = 0x100;
