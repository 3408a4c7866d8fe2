//! LIFO adapter with block-level pop.

use crate::error::CapacityError;
use crate::ring::ByteRing;
use crate::traits::{ByteConsumer, ByteProducer};

use core::cmp::min;

/// Byte stack over a [`ByteRing`].
///
/// Pushed bytes form one undifferentiated block: [`pop`](Self::pop) returns
/// the remaining block oldest-first, bounded by the current depth. There is
/// no byte-level reversal; callers that need true last-byte-first order must
/// track their own frame boundaries.
pub struct ByteStack<const N: usize> {
    ring: ByteRing<N>,
}

impl<const N: usize> ByteStack<N> {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ring: ByteRing::new(),
        }
    }

    /// Push bytes onto the stack. Returns the count stored.
    #[inline]
    pub fn push(&mut self, data: &[u8]) -> usize {
        self.ring.put(data)
    }

    /// Push all of `data`, or nothing.
    #[inline]
    pub fn try_push(&mut self, data: &[u8]) -> Result<(), CapacityError> {
        self.ring.try_put(data)
    }

    /// Pop up to `buf.len()` bytes, capped at the current depth.
    ///
    /// Bytes arrive in the order they were pushed. Returns 0 when the stack
    /// is empty.
    pub fn pop(&mut self, buf: &mut [u8]) -> usize {
        let depth = self.ring.len();
        if depth == 0 {
            return 0;
        }

        let to_read = min(buf.len(), depth);
        self.ring.get(&mut buf[..to_read])
    }

    /// Copy stored bytes into `buf` without removing them.
    #[inline]
    pub fn peek(&self, buf: &mut [u8]) -> usize {
        self.ring.peek(buf)
    }

    /// Bytes currently on the stack.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ring.len()
    }

    /// True if the stack holds no bytes.
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

    /// Stack capacity.
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

impl<const N: usize> Default for ByteStack<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ByteProducer for ByteStack<N> {
    #[inline]
    fn put(&mut self, data: &[u8]) -> usize {
        self.push(data)
    }

    #[inline]
    fn capacity(&self) -> usize {
        N
    }

    #[inline]
    fn len(&self) -> usize {
        self.depth()
    }
}

impl<const N: usize> ByteConsumer for ByteStack<N> {
    #[inline]
    fn get(&mut self, buf: &mut [u8]) -> usize {
        self.pop(buf)
    }

    #[inline]
    fn peek(&self, buf: &mut [u8]) -> usize {
        ByteStack::peek(self, buf)
    }

    #[inline]
    fn len(&self) -> usize {
        self.depth()
    }
}
