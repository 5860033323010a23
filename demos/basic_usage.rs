//! Basic registry usage example
//!
//! Builds a registry from a JSON configuration with a console appender,
//! then logs through a declared logger and an implicit one.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_registry::prelude::*;
use rust_logger_registry::info;

const CONFIG: &str = r#"{
    "appenders": {
        "console": [
            { "name": "stdout", "colors": true },
            { "name": "stderr-json", "target": "stderr", "format": "json" }
        ]
    },
    "loggers": {
        "root": { "level": "info", "appender_refs": ["stdout"] },
        "logger": [
            { "name": "db", "level": "debug", "appender_refs": ["stdout", "stderr-json"] }
        ]
    }
}"#;

fn main() -> Result<()> {
    println!("=== Rust Logger Registry - Basic Usage Example ===\n");

    let registry = Registry::from_json_str(CONFIG)?;

    println!("1. Declared logger 'db' (debug, two appenders):");
    let db = registry.get_logger("db");
    db.debug("connection pool warmed up");
    info!(db, "{} connections open", 8);

    println!("\n2. Implicit logger 'web' (root defaults, info):");
    let web = registry.get_logger("web");
    web.debug("hidden: below the root level");
    web.info_with_context(
        "request served",
        LogContext::new().with_field("status", 200).with_field("path", "/"),
    );

    println!("\n3. Raising the root level to WARN at runtime:");
    registry.root().level().set_level(LogLevel::Warn);
    web.info("hidden now");
    web.named("auth").warn("token close to expiry");

    registry.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
