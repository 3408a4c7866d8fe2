//! A `no_std` fixed-capacity byte ring buffer with queue, stack, and deque
//! adapters layered on top.
//!
//! # Ring buffer
//!
//! ```
//! use byte_ring::ByteRing;
//!
//! let mut ring: ByteRing<16> = ByteRing::new();
//!
//! let written = ring.put(b"hello");
//! assert_eq!(written, 5);
//!
//! let mut out = [0u8; 16];
//! let read = ring.get(&mut out);
//! assert_eq!(&out[..read], b"hello");
//! ```
//!
//! Capacity is a const generic and must be a power of two; anything else is
//! rejected at compile time. Writes that do not fit truncate silently:
//! every operation returns the byte count it actually moved, and callers
//! compare that against what they asked for. Nothing blocks, nothing
//! allocates, and no operation returns an error except the explicit `try_`
//! variants.
//!
//! # Adapters
//!
//! Each adapter owns its own ring, so any number of independent buffers can
//! coexist:
//!
//! ```
//! use byte_ring::ByteDeque;
//!
//! let mut deque: ByteDeque<16> = ByteDeque::new();
//! deque.push_back(b"First");
//! deque.push_front(b"Second");
//!
//! let mut out = [0u8; 16];
//! let read = deque.pop_front(&mut out);
//! assert_eq!(&out[..read], b"SecondFirst");
//! ```

#![no_std]
#![warn(missing_docs)]

mod deque;
mod error;
mod iter;
mod queue;
mod ring;
mod stack;
mod traits;


pub use deque::ByteDeque;
pub use error::CapacityError;
pub use iter::Bytes;
pub use queue::ByteQueue;
pub use ring::ByteRing;
pub use stack::ByteStack;
pub use traits::{ByteConsumer, ByteProducer, ByteRingOps};
