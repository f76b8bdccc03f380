//! Universal Asynchronous Receiver-Transmitter (UART).
//!
//! Implements a polled, synchronous 16550-compatible UART for testbench harnesses.
//! It provides:
//! 1. **Register File:** Offset dispatch for RBR/THR, IER, IIR/FCR, LCR, MCR, LSR, MSR and SCR.
//! 2. **FIFO Engine:** 16-slot receive and transmit FIFOs with overflow-drop semantics.
//! 3. **Lifecycle:** `initialize` / `teardown` transitions with optional preloaded input.
//! 4. **Byte Stream:** `getc` / `putc` helpers that bypass offset dispatch.
//!
//! No access ever fails. Full FIFOs drop, empty FIFOs return a sentinel, unknown
//! offsets read as `0xFF` and ignore writes, just as a real part never rejects a
//! bus cycle.

/// Time source and heartbeat throttle for diagnostics.
pub mod clock;

/// Circular byte FIFO.
pub mod fifo;

/// Stored register set.
pub mod registers;

/// Destinations for transmitted bytes.
pub mod sink;

use std::fmt;

use crate::common::constants::{
    LSR_DATA_READY, LSR_TX_IDLE, REG_IER, REG_IIR_FCR, REG_LCR, REG_LSR, REG_MCR, REG_MSR,
    REG_RBR_THR, REG_SCR, UNMAPPED_READ,
};
use crate::config::UartConfig;
use crate::soc::traits::Device;

pub use clock::{Clock, Heartbeat, MonotonicClock};
pub use fifo::Fifo;
pub use registers::RegisterSet;
pub use sink::{ConsoleSink, OutputSink, SharedBufferSink};

/// High-level lifecycle state of the peripheral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UartState {
    /// Constructed or torn down; FIFOs are empty.
    #[default]
    Uninitialized,
    /// Initialized and servicing register accesses.
    Ready,
}

/// Occupancy snapshot of both FIFOs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FifoStatus {
    /// Bytes waiting in the receive FIFO.
    pub rx_count: usize,
    /// Bytes waiting in the transmit FIFO.
    pub tx_count: usize,
}

/// 16550-compatible UART model.
///
/// The instance owns its registers and FIFOs outright. Callers serialize
/// access themselves; nothing here blocks or locks.
pub struct Uart {
    /// Base physical address of the device window.
    base_addr: u64,
    /// Size of the device window in bytes.
    window_size: u64,
    /// Input pushed into the receive FIFO on every `initialize`.
    preload: Vec<u8>,
    /// Lifecycle state.
    state: UartState,
    /// Stored registers.
    regs: RegisterSet,
    /// Receive FIFO (read through RBR).
    rx: Fifo,
    /// Transmit FIFO (written through THR).
    tx: Fifo,
    /// Where transmitted bytes go; `None` leaves them queued in `tx`.
    sink: Option<Box<dyn OutputSink>>,
    /// Time source for the diagnostic heartbeat.
    clock: Box<dyn Clock>,
    /// Heartbeat for `getc`.
    getc_heartbeat: Heartbeat,
    /// Heartbeat for `try_getc`.
    try_getc_heartbeat: Heartbeat,
}

impl Uart {
    /// Creates a UART that writes transmitted bytes to the host console.
    ///
    /// The device starts [`UartState::Uninitialized`]; call [`Uart::initialize`]
    /// before use.
    ///
    /// # Arguments
    ///
    /// * `config` - Window placement, preload input, console routing and heartbeat interval.
    pub fn new(config: &UartConfig) -> Self {
        Self::detached(config).with_sink(Box::new(ConsoleSink::new(config.to_stderr)))
    }

    /// Creates a UART with no output sink. Transmitted bytes stay in the
    /// transmit FIFO until taken with [`Uart::drain_transmit`].
    pub fn detached(config: &UartConfig) -> Self {
        Self {
            base_addr: config.base_addr,
            window_size: config.window_size,
            preload: config.preload_bytes().to_vec(),
            state: UartState::Uninitialized,
            regs: RegisterSet::POWER_ON,
            rx: Fifo::receive(),
            tx: Fifo::transmit(),
            sink: None,
            clock: Box::new(MonotonicClock::new()),
            getc_heartbeat: Heartbeat::new(config.heartbeat_interval_ms),
            try_getc_heartbeat: Heartbeat::new(config.heartbeat_interval_ms),
        }
    }

    /// Replaces the output sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn OutputSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replaces the diagnostic time source.
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Attaches, replaces or removes the output sink. Returns the previous one.
    pub fn set_sink(&mut self, sink: Option<Box<dyn OutputSink>>) -> Option<Box<dyn OutputSink>> {
        std::mem::replace(&mut self.sink, sink)
    }

    /// Replaces the bytes preloaded by subsequent calls to [`Uart::initialize`].
    pub fn set_preload(&mut self, preload: &[u8]) {
        self.preload = preload.to_vec();
    }

    /// Resets the peripheral and moves it to [`UartState::Ready`].
    ///
    /// Clears both FIFOs, restores power-on register values and pushes the
    /// configured preload into the receive FIFO (overflow-drop applies).
    pub fn initialize(&mut self) {
        self.rx.clear();
        self.tx.clear();
        self.regs.reset();
        for &byte in &self.preload {
            self.rx.enqueue(byte);
        }
        self.state = UartState::Ready;
        tracing::debug!(
            preload_len = self.preload.len(),
            rx_count = self.rx.occupied_count(),
            "uart16550 initialized"
        );
    }

    /// Clears both FIFOs and returns to [`UartState::Uninitialized`].
    ///
    /// Register contents are left as they are and carry no meaning until the
    /// next [`Uart::initialize`].
    pub fn teardown(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.flush();
        }
        self.rx.clear();
        self.tx.clear();
        self.state = UartState::Uninitialized;
        tracing::debug!("uart16550 torn down");
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> UartState {
        self.state
    }

    /// Returns true once initialized and not yet torn down.
    pub fn is_ready(&self) -> bool {
        self.state == UartState::Ready
    }

    /// Snapshot of the stored registers.
    pub const fn registers(&self) -> RegisterSet {
        self.regs
    }

    /// The receive FIFO.
    pub const fn rx_fifo(&self) -> &Fifo {
        &self.rx
    }

    /// The transmit FIFO.
    pub const fn tx_fifo(&self) -> &Fifo {
        &self.tx
    }

    /// Occupancy of both FIFOs, for diagnostics.
    pub const fn fifo_status(&self) -> FifoStatus {
        FifoStatus {
            rx_count: self.rx.occupied_count(),
            tx_count: self.tx.occupied_count(),
        }
    }

    /// Reads the register at `offset`.
    ///
    /// Reading RBR consumes one received byte (`0xFF` when empty). LSR is
    /// computed from FIFO state. Unknown offsets read as `0xFF`.
    pub fn read_reg(&mut self, offset: u8) -> u8 {
        let val = match offset {
            REG_RBR_THR => self.read_rbr(),
            REG_IER => self.regs.ier,
            REG_IIR_FCR => self.regs.iir,
            REG_LCR => self.regs.lcr,
            REG_MCR => self.regs.mcr,
            REG_LSR => self.lsr(),
            REG_MSR => self.regs.msr,
            REG_SCR => self.regs.scr,
            _ => UNMAPPED_READ,
        };
        tracing::trace!(offset, val, "uart16550 read");
        val
    }

    /// Writes `val` to the register at `offset`.
    ///
    /// A THR write enters the transmit path. Writes to MSR, LSR and unknown
    /// offsets are ignored.
    pub fn write_reg(&mut self, offset: u8, val: u8) {
        tracing::trace!(offset, val, "uart16550 write");
        match offset {
            REG_RBR_THR => self.transmit(val),
            REG_IER => self.regs.ier = val,
            REG_IIR_FCR => self.regs.fcr = val,
            REG_LCR => self.regs.lcr = val,
            REG_MCR => self.regs.mcr = val,
            REG_SCR => self.regs.scr = val,
            _ => {}
        }
    }

    /// Computes the Line Status Register.
    ///
    /// The transmitter bits are always set; data-ready follows the receive FIFO.
    pub const fn lsr(&self) -> u8 {
        if self.rx.is_empty() {
            LSR_TX_IDLE
        } else {
            LSR_TX_IDLE | LSR_DATA_READY
        }
    }

    fn read_rbr(&mut self) -> u8 {
        if self.rx.is_empty() {
            tracing::trace!("uart16550 rx underflow");
        }
        self.rx.dequeue()
    }

    /// Pushes a byte into the transmit FIFO and, with a sink attached, drains
    /// the FIFO into it.
    fn transmit(&mut self, byte: u8) {
        if self.tx.is_full() {
            tracing::trace!(byte, "uart16550 tx overflow, byte dropped");
        }
        self.tx.enqueue(byte);
        if let Some(sink) = self.sink.as_mut() {
            while let Some(out) = self.tx.pop() {
                sink.write_byte(out);
            }
        }
    }

    /// Delivers an incoming byte to the receive FIFO (dropped if full).
    pub fn receive(&mut self, byte: u8) {
        if self.rx.is_full() {
            tracing::trace!(byte, "uart16550 rx overflow, byte dropped");
        }
        self.rx.enqueue(byte);
    }

    /// Delivers a run of incoming bytes; bytes beyond the free space are dropped.
    pub fn receive_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.receive(byte);
        }
    }

    /// Takes every byte still queued in the transmit FIFO, oldest first.
    pub fn drain_transmit(&mut self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.tx.occupied_count());
        while let Some(byte) = self.tx.pop() {
            out.push(byte);
        }
        out
    }

    /// Takes the oldest queued transmit byte, or `0x00` if none.
    pub fn dequeue_transmit(&mut self) -> u8 {
        self.tx.dequeue()
    }

    /// Returns the next received byte, or `0xFF` if none, bypassing offset dispatch.
    pub fn getc(&mut self) -> u8 {
        let now = self.clock.now_ms();
        if self.getc_heartbeat.poll(now) {
            tracing::info!(uptime_secs = now / 1000, "uart16550 getc heartbeat");
        }
        self.rx.dequeue()
    }

    /// Returns the next received byte, or `None` if none, bypassing offset dispatch.
    pub fn try_getc(&mut self) -> Option<u8> {
        let now = self.clock.now_ms();
        if self.try_getc_heartbeat.poll(now) {
            tracing::info!(uptime_secs = now / 1000, "uart16550 try_getc heartbeat");
        }
        self.rx.pop()
    }

    /// Transmits one byte, bypassing offset dispatch.
    pub fn putc(&mut self, byte: u8) {
        self.transmit(byte);
    }
}

impl fmt::Debug for Uart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uart")
            .field("base_addr", &format_args!("{:#x}", self.base_addr))
            .field("state", &self.state)
            .field("regs", &self.regs)
            .field("fifo_status", &self.fifo_status())
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for Uart {
    /// Flushes any remaining output when the UART is dropped.
    fn drop(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            sink.flush();
        }
    }
}

impl Device for Uart {
    /// Returns the device name.
    fn name(&self) -> &str {
        "UART0"
    }

    /// Returns the address range (Base, Size).
    fn address_range(&self) -> (u64, u64) {
        (self.base_addr, self.window_size)
    }

    /// Reads a byte; offsets past the 8-bit register space read as `0xFF`.
    fn read_u8(&mut self, offset: u64) -> u8 {
        u8::try_from(offset).map_or(UNMAPPED_READ, |offset| self.read_reg(offset))
    }

    /// Reads a half-word (delegates to read_u8).
    fn read_u16(&mut self, offset: u64) -> u16 {
        self.read_u8(offset) as u16
    }
    /// Reads a word (delegates to read_u8).
    fn read_u32(&mut self, offset: u64) -> u32 {
        self.read_u8(offset) as u32
    }
    /// Reads a double-word (delegates to read_u8).
    fn read_u64(&mut self, offset: u64) -> u64 {
        self.read_u8(offset) as u64
    }

    /// Writes a byte; offsets past the 8-bit register space are ignored.
    fn write_u8(&mut self, offset: u64, val: u8) {
        if let Ok(offset) = u8::try_from(offset) {
            self.write_reg(offset, val);
        }
    }

    /// Writes a half-word (delegates to write_u8).
    fn write_u16(&mut self, offset: u64, val: u16) {
        self.write_u8(offset, val as u8);
    }
    /// Writes a word (delegates to write_u8).
    fn write_u32(&mut self, offset: u64, val: u32) {
        self.write_u8(offset, val as u8);
    }
    /// Writes a double-word (delegates to write_u8).
    fn write_u64(&mut self, offset: u64, val: u64) {
        self.write_u8(offset, val as u8);
    }
}
