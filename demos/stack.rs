//! Byte stack walkthrough.
//!
//! Run with: cargo run --example stack

use byte_ring::ByteStack;

fn main() {
    let mut stack: ByteStack<16> = ByteStack::new();

    stack.push(b"First");
    stack.push(b"Second");
    println!("depth after two pushes: {}", stack.depth());

    // The stack treats its content as one block: pop returns the remaining
    // bytes in push order rather than reversing them.
    let mut buf = [0u8; 16];
    let popped = stack.pop(&mut buf);
    println!(
        "popped {popped} bytes: {:?}",
        core::str::from_utf8(&buf[..popped]).unwrap()
    );

    let popped = stack.pop(&mut buf);
    println!("pop on empty stack moved {popped} bytes");

    // Oversized pushes truncate silently; the count says how much fit.
    let oversized = b"0123456789ABCDEF01";
    let written = stack.push(oversized);
    println!(
        "pushed {written} of {} oversized bytes, depth {}",
        oversized.len(),
        stack.depth()
    );
}
