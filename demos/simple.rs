//! Building bounded text from mixed values.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use strbuilder::{NumberMode, StringBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    // Accumulate heterogeneous values into one buffer
    let mut report = StringBuilder::new();
    report.append("request ")?;
    report.append(42)?;
    report.append(" ok=")?;
    report.append(true)?;
    report.append(" codes=")?;
    report.append(vec![200, 301])?;

    println!("Mixed append:\n{}\n", report);

    // Byte mode renders in-range numbers as characters
    let mut greeting = StringBuilder::new();
    greeting.append_join_with([72, 105, 33], "", NumberMode::Byte)?;
    println!("Byte mode: {}\n", greeting);

    // A capacity bound rejects oversized mutations before they commit
    let mut tag = StringBuilder::try_new("Hello", 10)?;
    let err = tag.append(" World!").unwrap_err();
    println!("Rejected:  {}", err);
    println!("Buffer:    {:?}", tag.as_str());

    tag.append("World")?;
    println!("Exact fit: {:?}", tag.as_str());

    assert_eq!(tag.len(), 10);
    println!("✓ Capacity bound held at {} chars", tag.max_capacity().unwrap());

    Ok(())
}
