//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::Serialize;
use std::error::Error;
use strbuilder::{to_value, value, StringBuilder, Value};

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build values dynamically with the value! macro
    let config = value!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    // Access fields dynamically
    if let Value::Object(obj) = &config {
        if let Some(Value::String(host)) = obj.get("host") {
            println!("Accessing field 'host': {}", host);
        }

        if let Some(port) = obj.get("port").and_then(|v| v.as_i64()) {
            println!("Accessing field 'port': {}", port);
        }

        if let Some(Value::Array(features)) = obj.get("features") {
            println!("Accessing field 'features': {} items\n", features.len());
        }
    }

    // Objects append as a fixed placeholder; fields never leak into text
    let mut log = StringBuilder::new();
    log.append("config=")?;
    log.append(config)?;
    println!("Appended object: {}\n", log);

    // Convert an existing struct to a Value
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;

    // Runtime type checking
    println!("Type checks:");
    println!("  is_object: {}", user_value.is_object());
    println!("  is_array:  {}", user_value.is_array());
    println!("  is_string: {}", user_value.is_string());

    // Pull the fields that matter out of the Value and append those
    let mut line = StringBuilder::new();
    if let Value::Object(obj) = &user_value {
        line.append("user ")?;
        if let Some(id) = obj.get("id").and_then(|v| v.as_i64()) {
            line.append(id)?;
        }
        if let Some(Value::Array(roles)) = obj.get("roles") {
            line.append(" roles=")?;
            line.append_join(roles.clone())?;
        }
    }
    println!("\nExtracted fields: {}", line);

    Ok(())
}
