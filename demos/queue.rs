//! FIFO queue walkthrough.
//!
//! Run with: cargo run --example queue

use byte_ring::ByteQueue;

fn main() {
    let mut queue: ByteQueue<16> = ByteQueue::new();

    let written = queue.enqueue(b"Hello");
    println!("enqueued {written} bytes");
    let written = queue.enqueue(b"World");
    println!("enqueued {written} bytes, length now {}", queue.len());

    let mut buf = [0u8; 16];
    let peeked = queue.peek(&mut buf);
    println!(
        "peek: {:?}",
        core::str::from_utf8(&buf[..peeked]).unwrap()
    );

    let read = queue.dequeue(&mut buf);
    println!(
        "dequeued {read} bytes: {:?}",
        core::str::from_utf8(&buf[..read]).unwrap()
    );

    // A drained queue reports zero-byte reads, not errors.
    let read = queue.dequeue(&mut buf);
    println!("dequeue on empty queue moved {read} bytes");
}
