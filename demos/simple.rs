//! Writing records to text and reading them back.
//!
//! Run with: cargo run --example simple

use pyson::{from_str, to_string, Record};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let records = vec![
        Record::new("user", "Alice Johnson"),
        Record::new("id", 42),
        Record::new("score", 97.5),
        Record::new("roles", vec!["admin", "developer"]),
    ];

    // Encode, one record per line
    let text = to_string(&records)?;
    println!("pyson output:\n{}", text);

    // Decode back
    let records_back = from_str(&text)?;
    assert_eq!(records, records_back);
    println!("✓ Round-trip successful");

    Ok(())
}
