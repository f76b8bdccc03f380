//! Output sinks for transmitted bytes.
//!
//! Bytes written to the Transmitter Holding Register leave the model through
//! an [`OutputSink`]. The harness decides where they go: the host console, an
//! in-memory capture, or nowhere at all.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Destination for bytes leaving the transmit FIFO.
pub trait OutputSink: Send + Sync {
    /// Accepts one transmitted byte.
    fn write_byte(&mut self, byte: u8);

    /// Pushes any buffered output to its destination.
    fn flush(&mut self) {}
}

/// Writes transmitted bytes to the host's stdout or stderr.
///
/// Each byte is flushed immediately so console output interleaves correctly
/// with the harness's own logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    to_stderr: bool,
}

impl ConsoleSink {
    /// Creates a console sink; `to_stderr` selects stderr over stdout.
    pub const fn new(to_stderr: bool) -> Self {
        Self { to_stderr }
    }

    fn emit(&self, bytes: &[u8]) -> io::Result<()> {
        if self.to_stderr {
            let mut err = io::stderr().lock();
            err.write_all(bytes)?;
            err.flush()
        } else {
            let mut out = io::stdout().lock();
            out.write_all(bytes)?;
            out.flush()
        }
    }
}

impl OutputSink for ConsoleSink {
    fn write_byte(&mut self, byte: u8) {
        // A closed console must not disturb the register contract.
        if let Err(err) = self.emit(&[byte]) {
            tracing::trace!(%err, "console write failed");
        }
    }
}

/// Captures transmitted bytes in a shared buffer.
///
/// Clones share the same buffer, so the harness can keep one handle while the
/// UART owns another.
#[derive(Clone, Default)]
pub struct SharedBufferSink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedBufferSink {
    /// Creates an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything captured so far.
    pub fn contents(&self) -> Vec<u8> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns everything captured so far.
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.buffer.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of bytes captured.
    pub fn len(&self) -> usize {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for SharedBufferSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBufferSink")
            .field("len", &self.len())
            .finish()
    }
}

impl OutputSink for SharedBufferSink {
    fn write_byte(&mut self, byte: u8) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(byte);
    }
}
