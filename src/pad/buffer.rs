//! # Bounded Text Buffer
//!
//! A fixed-capacity, append-only byte accumulator used to assemble padded
//! output. It never writes past its backing storage, and it remembers whether
//! an append ran past the end.
//!
//! ## Overflow Sentinel
//!
//! `written` is a logical length that may legally reach `capacity + 1`. That
//! one-past-capacity value means "overflowed" and is sticky: once set, every
//! further append is a no-op. `append` is therefore total. Callers append
//! unconditionally and check [`BoundedTextBuffer::has_overflowed`] once at the
//! end instead of threading errors through every concatenation.
//!
//! ## Terminator Slot
//!
//! [`BoundedTextBuffer::finalize`] reserves the last byte of storage as a
//! terminator when the buffer is full, so a buffer that is exactly full
//! yields `capacity - 1` bytes. Appends to an exactly full buffer are dropped
//! without setting the flag. Callers size with at least one spare byte.

use crate::error::Result;

#[derive(Debug)]
pub struct BoundedTextBuffer {
    storage: Box<[u8]>,
    written: usize,
}

impl BoundedTextBuffer {
    /// Allocates `capacity` bytes of backing storage.
    ///
    /// Fails with [`crate::error::PadError::Allocation`] when the allocation
    /// cannot be made; no partially usable buffer is ever returned.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut storage = Vec::new();
        storage.try_reserve_exact(capacity)?;
        storage.resize(capacity, 0);

        tracing::trace!(capacity, "allocated bounded buffer");

        Ok(Self {
            storage: storage.into_boxed_slice(),
            written: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Bytes actually held in storage.
    pub fn used(&self) -> usize {
        self.written.min(self.capacity())
    }

    pub fn remaining_capacity(&self) -> usize {
        if self.has_overflowed() {
            return 0;
        }
        self.capacity() - self.written
    }

    pub fn has_overflowed(&self) -> bool {
        self.written > self.capacity()
    }

    /// Copies as much of `bytes` as fits, then flags overflow if anything was
    /// left over. A buffer with no room left ignores the append entirely.
    pub fn append(&mut self, bytes: &[u8]) {
        let available = self.remaining_capacity();
        if available == 0 {
            return;
        }

        let take = bytes.len().min(available);
        self.storage[self.written..self.written + take].copy_from_slice(&bytes[..take]);

        if bytes.len() > available {
            self.set_overflow();
        } else {
            self.written += take;
        }
    }

    /// Read-only view of the written bytes.
    ///
    /// Ends at `written` while there is room left, otherwise at
    /// `capacity - 1` (the terminator slot). Empty for a zero-capacity buffer.
    pub fn finalize(&self) -> &[u8] {
        let capacity = self.capacity();
        if capacity == 0 {
            return &[];
        }

        let end = if self.remaining_capacity() > 0 {
            self.written
        } else {
            capacity - 1
        };
        &self.storage[..end]
    }

    /// Resets the logical length. Storage is neither freed nor zeroed.
    pub fn clear(&mut self) {
        self.written = 0;
    }

    fn set_overflow(&mut self) {
        self.written = self.capacity() + 1;
    }
}
