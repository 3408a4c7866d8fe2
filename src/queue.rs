//! FIFO adapter.

use crate::error::CapacityError;
use crate::ring::ByteRing;
use crate::traits::{ByteConsumer, ByteProducer};

/// First-in first-out byte queue over a [`ByteRing`].
///
/// Every operation is a direct pass-through: FIFO order is the ring's
/// native order.
pub struct ByteQueue<const N: usize> {
    ring: ByteRing<N>,
}

impl<const N: usize> ByteQueue<N> {
    /// Create an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ring: ByteRing::new(),
        }
    }

    /// Append bytes at the back. Returns the count stored.
    #[inline]
    pub fn enqueue(&mut self, data: &[u8]) -> usize {
        self.ring.put(data)
    }

    /// Append all of `data`, or nothing.
    #[inline]
    pub fn try_enqueue(&mut self, data: &[u8]) -> Result<(), CapacityError> {
        self.ring.try_put(data)
    }

    /// Remove up to `buf.len()` bytes from the front. Returns the count.
    #[inline]
    pub fn dequeue(&mut self, buf: &mut [u8]) -> usize {
        self.ring.get(buf)
    }

    /// Copy front bytes into `buf` without removing them.
    #[inline]
    pub fn peek(&self, buf: &mut [u8]) -> usize {
        self.ring.peek(buf)
    }

    /// Queued byte count.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// True if nothing is queued.
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

    /// Queue capacity.
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

    /// Drop all queued bytes.
    pub fn clear(&mut self) {
        self.ring.clear();
    }
}

impl<const N: usize> Default for ByteQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ByteProducer for ByteQueue<N> {
    #[inline]
    fn put(&mut self, data: &[u8]) -> usize {
        self.enqueue(data)
    }

    #[inline]
    fn capacity(&self) -> usize {
        N
    }

    #[inline]
    fn len(&self) -> usize {
        ByteQueue::len(self)
    }
}

impl<const N: usize> ByteConsumer for ByteQueue<N> {
    #[inline]
    fn get(&mut self, buf: &mut [u8]) -> usize {
        self.dequeue(buf)
    }

    #[inline]
    fn peek(&self, buf: &mut [u8]) -> usize {
        ByteQueue::peek(self, buf)
    }

    #[inline]
    fn len(&self) -> usize {
        ByteQueue::len(self)
    }
}
