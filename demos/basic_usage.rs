//! Basic logger usage example
//!
//! Demonstrates a console logger, the threshold filter and the four levels.
//!
//! Run with: cargo run --example basic_usage

use rust_log_facade::prelude::*;
use rust_log_facade::{info, log_data};

fn main() {
    println!("=== Rust Log Facade - Basic Usage Example ===\n");

    // Console output, level attached by the LevelTag filter
    let logger = Logger::builder(ConsoleEncoder::new())
        .threshold(LogLevel::Trace)
        .threshold_filter()
        .filter(LevelTag::default())
        .build();

    println!("1. Logging at different levels:");
    logger.trace(log_data! { "msg" => "This is a trace message" });
    logger.info(log_data! { "msg" => "This is an info message" });
    logger.error(log_data! { "msg" => "This is an error message" });
    logger.fatal(log_data! { "msg" => "This is a fatal message" });

    println!("\n2. Logging with a stricter threshold:");
    let logger = Logger::builder(ConsoleEncoder::new())
        .threshold(LogLevel::Error)
        .threshold_filter()
        .filter(LevelTag::default())
        .build();
    println!("   Threshold set to ERROR - info and trace won't show:");
    logger.trace(log_data! { "msg" => "Trace message (hidden)" });
    logger.info(log_data! { "msg" => "Info message (hidden)" });
    logger.error(log_data! { "msg" => "Error message (visible)", "code" => 500 });

    println!("\n3. Logging with the macros:");
    let port = 8080;
    info!(logger, "msg" => "dropped, below threshold", "port" => port);
    rust_log_facade::error!(logger, "msg" => "bind failed", "port" => port);

    println!("\n4. Logger metrics:");
    let metrics = logger.metrics();
    println!(
        "   encoded={} filtered={} failed={}",
        metrics.encoded_count(),
        metrics.filtered_count(),
        metrics.failed_count()
    );

    println!("\n=== Example completed successfully! ===");
}
