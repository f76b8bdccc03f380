//! Time source and throttled heartbeat for diagnostics.
//!
//! The UART never uses time functionally. The byte-level entry points consult
//! a [`Clock`] only to decide whether enough time has passed to log a
//! heartbeat, which shows a harness that the console is still being polled.

use std::fmt;
use std::time::Instant;

/// Monotonic millisecond time source.
pub trait Clock: Send + Sync {
    /// Milliseconds elapsed since an arbitrary, fixed origin.
    fn now_ms(&self) -> u64;
}

/// [`Clock`] backed by [`std::time::Instant`], counting from its creation.
#[derive(Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MonotonicClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonotonicClock")
            .field("uptime_ms", &self.now_ms())
            .finish()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Rate limiter for diagnostic log lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Heartbeat {
    interval_ms: u64,
    last_ms: u64,
}

impl Heartbeat {
    /// Creates a heartbeat that fires at most once per `interval_ms`.
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: 0,
        }
    }

    /// Returns true, and records `now_ms`, if more than the interval has
    /// elapsed since the last firing.
    pub const fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_ms) > self.interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Time of the last firing (0 if it never fired).
    pub const fn last_ms(&self) -> u64 {
        self.last_ms
    }
}
