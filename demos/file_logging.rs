//! File logging example
//!
//! Demonstrates building a JSON file logger from configuration and a
//! logfmt file logger by hand.
//!
//! Run with: cargo run --example file_logging

use rust_log_facade::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Log Facade - File Logging Example ===\n");

    println!("1. JSON file logger from configuration:");
    let config = LoggerConfig::from_json(
        r#"{
            "threshold": "info",
            "format": "json",
            "destination": { "file": "application.log" },
            "fields": { "service": "file-demo" },
            "redact": ["password"]
        }"#,
    )?;
    let logger = config.build()?;

    logger.info(LogData::new().with_field("msg", "Application started"));
    logger.trace(LogData::new().with_field("msg", "Loading configuration..."));
    logger.info(
        LogData::new()
            .with_field("msg", "User logged in")
            .with_field("user", "alice")
            .with_field("password", "hunter2"),
    );
    logger.error(LogData::new().with_field("msg", "Failed to load optional plugin"));

    for i in 1..=5 {
        logger.info(
            LogData::new()
                .with_field("msg", "Processing item")
                .with_field("item", i)
                .with_field("total", 5),
        );
    }

    // Dropping the logger flushes the file
    drop(logger);
    println!("   Wrote application.log");

    println!("\n2. logfmt file logger:");
    let logger = Logger::builder(LogfmtEncoder::file("application.logfmt")?)
        .threshold(LogLevel::Trace)
        .threshold_filter()
        .filter(Sanitize)
        .filter(LevelTag::default())
        .filter(Timestamp::with_format(TimestampFormat::Rfc3339))
        .build();

    logger.trace(LogData::new().with_field("msg", "multi\nline input is escaped"));
    logger.info(LogData::new().with_field("msg", "Shutdown complete").with_field("ok", true));
    drop(logger);
    println!("   Wrote application.logfmt");

    println!("\n3. Log file contents:");
    for path in ["application.log", "application.logfmt"] {
        println!("   --- {} ---", path);
        for line in std::fs::read_to_string(path)?.lines() {
            println!("   {}", line);
        }
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
