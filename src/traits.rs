//! Byte transfer traits.

/// Writer half of a byte container.
pub trait ByteProducer {
    /// Write as many bytes of `data` as fit. Returns the count stored.
    fn put(&mut self, data: &[u8]) -> usize;

    /// Capacity in bytes.
    fn capacity(&self) -> usize;

    /// Current occupied byte count.
    fn len(&self) -> usize;

    /// Free bytes remaining.
    fn free(&self) -> usize {
        self.capacity() - self.len()
    }

    /// True if no bytes are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if no free space remains.
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

/// Reader half of a byte container.
pub trait ByteConsumer {
    /// Remove up to `buf.len()` of the oldest bytes into `buf`. Returns the
    /// count moved, 0 when empty.
    fn get(&mut self, buf: &mut [u8]) -> usize;

    /// Copy up to `buf.len()` of the oldest bytes into `buf` without
    /// removing them. Returns the count observed.
    fn peek(&self, buf: &mut [u8]) -> usize;

    /// Current occupied byte count.
    fn len(&self) -> usize;

    /// True if no bytes are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Combined producer and consumer.
pub trait ByteRingOps: ByteProducer + ByteConsumer {}

impl<R: ByteProducer + ByteConsumer> ByteRingOps for R {}
