//! Typed accessors and coercions on Value.
//!
//! Run with: cargo run --example dynamic_values

use pyson::{Reader, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut reader = Reader::from_str("retries:int:3\nratio:float:0.5\nname:str:a(*)b\n");

    for record in reader.all()? {
        let value = record.value();
        println!("{} is {}", record.name(), value.type_name());

        // Defaults, options, and typed errors
        println!("  int_or(-1) = {}", value.int_or(-1));
        println!("  get_float  = {:?}", value.get_float());
        match value.try_str() {
            Ok(s) => println!("  try_str    = {:?}", s),
            Err(e) => println!("  try_str    -> {}", e),
        }

        // Coercions
        let mut as_list = value.clone();
        as_list.force_to_list();
        println!("  as list    = {:?}", as_list.list_or_empty());
    }

    let mut value = Value::from(vec!["x", "y"]);
    value.force_to_string();
    println!("\nlist forced to string: {:?}", value);

    Ok(())
}
