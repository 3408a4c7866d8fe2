//! Double-ended adapter with emulated head-side operations.

use crate::error::{CapacityError, CapacitySnafu};
use crate::ring::ByteRing;
use crate::traits::{ByteConsumer, ByteProducer};

use core::cmp::min;
use snafu::ensure;

/// Double-ended byte queue over a [`ByteRing`].
///
/// Tail-side operations map directly onto the ring. Head-side insertion and
/// tail-side removal are emulated: the live content is drained into a
/// stack-local holding array, rearranged, and written back. That costs
/// O(len) per call but keeps the ring's single-cursor layout; the buffer is
/// self-consistent after every call, including rejected ones.
pub struct ByteDeque<const N: usize> {
    ring: ByteRing<N>,
}

impl<const N: usize> ByteDeque<N> {
    /// Create an empty deque.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ring: ByteRing::new(),
        }
    }

    /// Append bytes at the back. Returns the count stored.
    #[inline]
    pub fn push_back(&mut self, data: &[u8]) -> usize {
        self.ring.put(data)
    }

    /// Append all of `data` at the back, or nothing.
    #[inline]
    pub fn try_push_back(&mut self, data: &[u8]) -> Result<(), CapacityError> {
        self.ring.try_put(data)
    }

    /// Insert bytes at the front, ahead of the existing content.
    ///
    /// All-or-nothing: returns 0 and leaves the deque untouched when the new
    /// bytes plus the current content would exceed capacity. On success the
    /// previously stored bytes follow the new ones in their original order,
    /// and the full `data.len()` count is returned.
    pub fn push_front(&mut self, data: &[u8]) -> usize {
        let held = self.ring.len();
        if held + data.len() > N {
            return 0;
        }

        let mut tmp = [0u8; N];
        if held > 0 {
            self.ring.get(&mut tmp[..held]);
        }

        let written = self.ring.put(data);
        if held > 0 {
            self.ring.put(&tmp[..held]);
        }

        written
    }

    /// Insert all of `data` at the front, or nothing.
    ///
    /// Same acceptance condition as [`push_front`](Self::push_front), with
    /// the rejection reported as an error instead of a zero count.
    pub fn try_push_front(&mut self, data: &[u8]) -> Result<(), CapacityError> {
        ensure!(
            data.len() <= self.ring.free(),
            CapacitySnafu {
                requested: data.len(),
                available: self.ring.free(),
            }
        );
        self.push_front(data);
        Ok(())
    }

    /// Remove up to `buf.len()` bytes from the front. Returns the count.
    #[inline]
    pub fn pop_front(&mut self, buf: &mut [u8]) -> usize {
        self.ring.get(buf)
    }

    /// Remove up to `buf.len()` of the most recently appended bytes.
    ///
    /// The removed bytes arrive in their stored order; any remainder keeps
    /// its order at the front. Returns 0 when the deque is empty.
    pub fn pop_back(&mut self, buf: &mut [u8]) -> usize {
        let held = self.ring.len();
        if held == 0 {
            return 0;
        }

        let mut tmp = [0u8; N];
        self.ring.get(&mut tmp[..held]);

        let to_pop = min(buf.len(), held);
        let to_keep = held - to_pop;
        buf[..to_pop].copy_from_slice(&tmp[to_keep..held]);
        if to_keep > 0 {
            self.ring.put(&tmp[..to_keep]);
        }

        to_pop
    }

    /// Copy front bytes into `buf` without removing them.
    #[inline]
    pub fn peek_front(&self, buf: &mut [u8]) -> usize {
        self.ring.peek(buf)
    }

    /// Copy up to `buf.len()` of the most recently appended bytes into `buf`
    /// without removing them.
    pub fn peek_back(&self, buf: &mut [u8]) -> usize {
        let held = self.ring.len();
        if held == 0 {
            return 0;
        }

        let mut tmp = [0u8; N];
        let peeked = self.ring.peek(&mut tmp[..held]);

        let to_peek = min(buf.len(), peeked);
        buf[..to_peek].copy_from_slice(&tmp[peeked - to_peek..peeked]);

        to_peek
    }

    /// Stored byte count.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// True if the deque holds no bytes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// True if no free space remains.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Deque capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Free bytes remaining.
    #[inline]
    #[must_use]
    pub fn free(&self) -> usize {
        self.ring.free()
    }

    /// Drop all stored bytes.
    pub fn clear(&mut self) {
        self.ring.clear();
    }
}

impl<const N: usize> Default for ByteDeque<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ByteProducer for ByteDeque<N> {
    #[inline]
    fn put(&mut self, data: &[u8]) -> usize {
        self.push_back(data)
    }

    #[inline]
    fn capacity(&self) -> usize {
        N
    }

    #[inline]
    fn len(&self) -> usize {
        ByteDeque::len(self)
    }
}

impl<const N: usize> ByteConsumer for ByteDeque<N> {
    #[inline]
    fn get(&mut self, buf: &mut [u8]) -> usize {
        self.pop_front(buf)
    }

    #[inline]
    fn peek(&self, buf: &mut [u8]) -> usize {
        self.peek_front(buf)
    }

    #[inline]
    fn len(&self) -> usize {
        ByteDeque::len(self)
    }
}
