//! Fixed-capacity circular byte storage.

use crate::error::{CapacityError, CapacitySnafu};
use crate::iter::Bytes;
use crate::traits::{ByteConsumer, ByteProducer};

use core::cmp::min;
use snafu::ensure;

/// Fixed-capacity ring buffer over raw bytes.
///
/// `N` is the capacity in bytes and must be a power of two; the constructor
/// enforces both at compile time. Writes land at the tail, reads drain from
/// the head, and both positions wrap modulo `N`. Every transfer returns the
/// byte count it actually moved: a short count is the normal signal for a
/// full or empty buffer, never an error.
///
/// Storage is an inline array, so a ring can live on the stack or in a
/// `static`. Nothing is heap-allocated, at construction or later.
pub struct ByteRing<const N: usize> {
    storage: [u8; N],
    head: usize,
    len: usize,
}

impl<const N: usize> ByteRing<N> {
    /// Create an empty ring.
    #[must_use]
    pub const fn new() -> Self {
        const { assert!(N > 0, "capacity must be > 0") };
        const { assert!(N.is_power_of_two(), "capacity must be power of two") };

        Self {
            storage: [0; N],
            head: 0,
            len: 0,
        }
    }

    /// Write as many bytes of `data` as fit at the tail.
    ///
    /// Returns the number of bytes stored, which is less than `data.len()`
    /// (possibly zero) when free space runs out. The caller decides whether
    /// a short write matters.
    pub fn put(&mut self, data: &[u8]) -> usize {
        let written = min(data.len(), N - self.len);
        let tail = (self.head + self.len) & (N - 1);
        let first = min(written, N - tail);

        self.storage[tail..tail + first].copy_from_slice(&data[..first]);
        self.storage[..written - first].copy_from_slice(&data[first..written]);

        self.len += written;
        written
    }

    /// Write all of `data`, or nothing.
    ///
    /// Unlike [`put`](Self::put), a write that does not fit completely is
    /// rejected without storing any bytes.
    pub fn try_put(&mut self, data: &[u8]) -> Result<(), CapacityError> {
        ensure!(
            data.len() <= self.free(),
            CapacitySnafu {
                requested: data.len(),
                available: self.free(),
            }
        );
        self.put(data);
        Ok(())
    }

    /// Remove up to `buf.len()` of the oldest bytes into `buf`.
    ///
    /// Returns the number of bytes moved, 0 when the ring is empty.
    pub fn get(&mut self, buf: &mut [u8]) -> usize {
        let read = self.copy_out(buf);
        self.head = (self.head + read) & (N - 1);
        self.len -= read;
        read
    }

    /// Copy up to `buf.len()` of the oldest bytes into `buf` without
    /// removing them.
    ///
    /// Selection and return value match [`get`](Self::get) exactly; the ring
    /// is left untouched, so repeated peeks observe the same bytes.
    pub fn peek(&self, buf: &mut [u8]) -> usize {
        self.copy_out(buf)
    }

    /// Number of occupied bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no bytes are stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if no free space remains.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Ring capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Free bytes remaining.
    #[inline]
    #[must_use]
    pub fn free(&self) -> usize {
        N - self.len
    }

    /// Drop all content.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Read the byte at `index` (0 = oldest) without removing it.
    #[inline]
    #[must_use]
    pub fn byte(&self, index: usize) -> Option<u8> {
        if index >= self.len {
            return None;
        }
        Some(self.storage[(self.head + index) & (N - 1)])
    }

    /// Iterate the live content, oldest to newest.
    #[inline]
    pub fn iter(&self) -> Bytes<'_, N> {
        Bytes::new(self)
    }

    /// Copy the oldest bytes into `buf`, leaving head and length alone.
    /// The live region may wrap, so up to two segments are copied.
    fn copy_out(&self, buf: &mut [u8]) -> usize {
        let read = min(buf.len(), self.len);
        let first = min(read, N - self.head);

        buf[..first].copy_from_slice(&self.storage[self.head..self.head + first]);
        buf[first..read].copy_from_slice(&self.storage[..read - first]);

        read
    }
}

impl<const N: usize> Default for ByteRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ByteProducer for ByteRing<N> {
    #[inline]
    fn put(&mut self, data: &[u8]) -> usize {
        ByteRing::put(self, data)
    }

    #[inline]
    fn capacity(&self) -> usize {
        N
    }

    #[inline]
    fn len(&self) -> usize {
        ByteRing::len(self)
    }
}

impl<const N: usize> ByteConsumer for ByteRing<N> {
    #[inline]
    fn get(&mut self, buf: &mut [u8]) -> usize {
        ByteRing::get(self, buf)
    }

    #[inline]
    fn peek(&self, buf: &mut [u8]) -> usize {
        ByteRing::peek(self, buf)
    }

    #[inline]
    fn len(&self) -> usize {
        ByteRing::len(self)
    }
}
