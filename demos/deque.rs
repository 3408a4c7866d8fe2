//! Double-ended queue walkthrough.
//!
//! Run with: cargo run --example deque

use byte_ring::ByteDeque;

fn main() {
    let mut deque: ByteDeque<16> = ByteDeque::new();

    let written = deque.push_back(b"First");
    println!("push_back stored {written} bytes");

    let written = deque.push_front(b"Second");
    println!("push_front stored {written} bytes, length now {}", deque.len());

    let mut buf = [0u8; 16];
    let peeked = deque.peek_front(&mut buf);
    println!(
        "peek_front: {:?}",
        core::str::from_utf8(&buf[..peeked]).unwrap()
    );

    let read = deque.pop_front(&mut buf);
    println!(
        "pop_front drained {read} bytes: {:?}",
        core::str::from_utf8(&buf[..read]).unwrap()
    );

    deque.push_back(b"First");
    let popped = deque.pop_back(&mut buf);
    println!(
        "pop_back returned {popped} bytes: {:?}",
        core::str::from_utf8(&buf[..popped]).unwrap()
    );

    // Head-side insertion is all-or-nothing: a write that cannot fit in full
    // is rejected with a zero count and the deque is left untouched.
    deque.push_back(b"0123456789ABC");
    let written = deque.push_front(b"XYZW");
    println!(
        "rejected push_front stored {written} bytes, length still {}",
        deque.len()
    );
}
