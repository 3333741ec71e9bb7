// demos/rqc_demo.rs

//! End-to-end demo: hash a message with a seeded random circuit and print
//! the winning outcome plus the top of the histogram.
//!
//! Run with: `cargo run --example rqc_demo`

use rqc_hash::{HashConfig, RqcHasher};

fn main() -> Result<(), rqc_hash::RqcError> {
    env_logger::init();

    let message = b"hello";
    let config = HashConfig::new(12, 8, 42, 1024);
    let hasher = RqcHasher::new(config)?;

    let result = hasher.digest(message)?;
    println!("message : {:?}", String::from_utf8_lossy(message));
    println!("{}", result);

    // Same circuit, different message: the dominant outcome shifts.
    let other = hasher.digest(b"hellp")?;
    println!("message : \"hellp\"");
    println!("{}", other);

    Ok(())
}
