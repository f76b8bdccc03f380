//! Device trait for memory-mapped I/O.
//!
//! This module defines the `Device` trait a harness uses to place a peripheral on its bus. It provides:
//! 1. **Identification:** `name` and `address_range` for bus routing.
//! 2. **Access:** Byte, half, word, and doubleword read/write at device-relative offsets.
//!
//! All implementors must be `Send + Sync` so a harness can move devices across threads.

/// Trait for memory-mapped I/O devices.
///
/// Offsets are relative to the base returned by [`Device::address_range`].
/// Accesses never fail; a device answers every offset in its window.
pub trait Device: Send + Sync {
    /// Returns a short name for this device (e.g., `"UART0"`).
    fn name(&self) -> &str;
    /// Returns (base_address, size_in_bytes) for this device's MMIO region.
    fn address_range(&self) -> (u64, u64);
    /// Reads one byte at the given device-relative offset.
    fn read_u8(&mut self, offset: u64) -> u8;
    /// Reads two bytes at the given offset.
    fn read_u16(&mut self, offset: u64) -> u16;
    /// Reads four bytes at the given offset.
    fn read_u32(&mut self, offset: u64) -> u32;
    /// Reads eight bytes at the given offset.
    fn read_u64(&mut self, offset: u64) -> u64;
    /// Writes one byte at the given offset.
    fn write_u8(&mut self, offset: u64, val: u8);
    /// Writes two bytes at the given offset.
    fn write_u16(&mut self, offset: u64, val: u16);
    /// Writes four bytes at the given offset.
    fn write_u32(&mut self, offset: u64, val: u32);
    /// Writes eight bytes at the given offset.
    fn write_u64(&mut self, offset: u64, val: u64);

    /// Returns true if the absolute address `addr` falls inside this device's window.
    fn contains(&self, addr: u64) -> bool {
        let (base, size) = self.address_range();
        addr >= base && addr - base < size
    }
}
