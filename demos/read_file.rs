//! Cursor operations over a pyson file on disk.
//!
//! Run with: RUST_LOG=debug cargo run --example read_file

use pyson::{to_writer, Reader, Record};
use std::error::Error;
use std::fs::File;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let path = std::env::temp_dir().join("pyson-read-file-demo.pyson");
    to_writer(
        File::create(&path)?,
        &[
            Record::new("width", 1280),
            Record::new("height", 720),
            Record::new("title", "Demo: main window"),
            Record::new("layers", vec!["background", "sprites", "ui"]),
        ],
    )?;

    let mut reader = Reader::open(&path)?;

    // Lookup by name leaves the cursor just past the match
    let height = reader.find_by_name("height")?;
    println!("height = {:?}", height);
    if let Some(next) = reader.next_record()? {
        println!("after height comes {}", next);
    }

    // Seek, then iterate what remains
    reader.go_to_line(2)?;
    for record in reader.records() {
        let record = record?;
        println!("{:>8} [{}] {}", record.name(), record.value().type_name(), record.value());
    }

    // Whole-file view
    let map = reader.as_mapping()?;
    let area = map.get("width").map_or(0, |v| v.int_or_zero())
        * map.get("height").map_or(0, |v| v.int_or_zero());
    println!("area = {}", area);

    drop(reader);
    std::fs::remove_file(&path)?;
    Ok(())
}
