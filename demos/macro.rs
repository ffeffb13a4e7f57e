//! Building values and record blocks with the pyson! macro.
//!
//! Run with: cargo run --example macro

use pyson::{pyson, to_string, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let port = pyson!(8080);
    let features = pyson!(["auth", "logging", "metrics"]);
    println!("port = {} ({})", port, port.type_name());
    println!("features = {} ({})\n", features, features.type_name());

    let config = pyson!({
        "host": "localhost",
        "port": 8080,
        "timeout": 2.5,
        "features": ["auth", "logging", "metrics"]
    });
    println!("Config as pyson:\n{}", to_string(&config)?);

    assert_eq!(config[3].value(), &features);
    assert_eq!(config[1].value(), &Value::Int(8080));

    Ok(())
}
