//! Circular byte FIFO for the UART receive and transmit paths.
//!
//! The FIFO is a fixed array addressed by two cursors:
//! 1. **Enqueue:** Stores at `tail` and advances it; a full buffer drops the byte.
//! 2. **Dequeue:** Takes from `head` and advances it; an empty buffer yields a sentinel.
//! 3. **Status:** Emptiness, fullness and occupancy are derived from the cursors alone.
//!
//! One slot is always left unused so that `head == tail` means empty and
//! `tail + 1 == head` (mod capacity) means full, without a separate count.

use crate::common::constants::{FIFO_CAPACITY, RX_EMPTY_SENTINEL, TX_EMPTY_SENTINEL};

/// Fixed-capacity byte FIFO with overflow-drop and sentinel-on-empty semantics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fifo {
    slots: [u8; FIFO_CAPACITY],
    /// Index of the oldest byte.
    head: usize,
    /// Index where the next byte will be stored.
    tail: usize,
    /// Value returned by [`Fifo::dequeue`] when empty.
    sentinel: u8,
}

impl Fifo {
    /// Creates an empty FIFO that yields `sentinel` when dequeued while empty.
    pub const fn new(sentinel: u8) -> Self {
        Self {
            slots: [0; FIFO_CAPACITY],
            head: 0,
            tail: 0,
            sentinel,
        }
    }

    /// Creates an empty receive FIFO (empty reads return `0xFF`).
    pub const fn receive() -> Self {
        Self::new(RX_EMPTY_SENTINEL)
    }

    /// Creates an empty transmit FIFO (empty reads return `0x00`).
    pub const fn transmit() -> Self {
        Self::new(TX_EMPTY_SENTINEL)
    }

    /// Total number of slots, including the reserved one.
    pub const fn capacity(&self) -> usize {
        FIFO_CAPACITY
    }

    /// Maximum number of bytes the FIFO can hold at once.
    pub const fn usable_capacity(&self) -> usize {
        FIFO_CAPACITY - 1
    }

    /// Value returned by [`Fifo::dequeue`] on an empty FIFO.
    pub const fn sentinel(&self) -> u8 {
        self.sentinel
    }

    /// Returns true if no bytes are pending.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns true if one more enqueue would be dropped.
    #[inline]
    pub const fn is_full(&self) -> bool {
        Self::advance(self.tail) == self.head
    }

    /// Number of pending bytes.
    pub const fn occupied_count(&self) -> usize {
        (self.tail + FIFO_CAPACITY - self.head) % FIFO_CAPACITY
    }

    /// Appends a byte; silently drops it if the FIFO is full.
    #[inline]
    pub fn enqueue(&mut self, byte: u8) {
        if self.is_full() {
            return;
        }
        self.slots[self.tail] = byte;
        self.tail = Self::advance(self.tail);
    }

    /// Removes and returns the oldest byte, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let byte = self.slots[self.head];
        self.head = Self::advance(self.head);
        Some(byte)
    }

    /// Removes and returns the oldest byte, or the FIFO's sentinel if empty.
    #[inline]
    pub fn dequeue(&mut self) -> u8 {
        self.dequeue_or(self.sentinel)
    }

    /// Removes and returns the oldest byte, or `fallback` if empty.
    #[inline]
    pub fn dequeue_or(&mut self, fallback: u8) -> u8 {
        self.pop().unwrap_or(fallback)
    }

    /// Returns the oldest byte without removing it.
    pub const fn peek(&self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[self.head])
        }
    }

    /// Zeroes the storage and resets both cursors.
    pub fn clear(&mut self) {
        self.slots = [0; FIFO_CAPACITY];
        self.head = 0;
        self.tail = 0;
    }

    #[inline]
    const fn advance(index: usize) -> usize {
        (index + 1) % FIFO_CAPACITY
    }
}

impl Default for Fifo {
    fn default() -> Self {
        Self::receive()
    }
}
