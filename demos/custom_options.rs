//! Reader and writer options.
//!
//! Run with: cargo run --example custom_options

use pyson::{
    to_string_with_options, IoLineSource, LineEnding, Reader, ReaderOptions, Record, WriterOptions,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let records = vec![Record::new("a", 1), Record::new("b", vec!["x(*)y"])];

    // Strict list checking refuses elements holding the separator
    match to_string_with_options(&records, WriterOptions::new()) {
        Ok(_) => println!("strict write succeeded"),
        Err(e) => println!("strict write refused: {}", e),
    }

    let options = WriterOptions::new()
        .with_line_ending(LineEnding::CrLf)
        .with_strict_lists(false);
    let text = to_string_with_options(&records, options)?;
    println!("lenient CRLF output: {:?}", text);

    // Blank lines are errors unless skipped
    let spaced = "a:int:1\n\nb:int:2\n";
    let mut reader = Reader::with_options(
        IoLineSource::from_bytes(spaced),
        ReaderOptions::new().with_skip_blank_lines(true),
    );
    println!("records with blank lines skipped: {}", reader.all()?.len());

    Ok(())
}
