//! Custom filter example
//!
//! Demonstrates writing filters as closures, plain functions and structs,
//! and routing encoder failures to a custom diagnostic sink.
//!
//! Run with: cargo run --example custom_filters

use rust_log_facade::filters::{threshold, RequireKeys};
use rust_log_facade::prelude::*;
use std::sync::Arc;

/// Drops health-check noise unless it failed
fn skip_health_checks(level: LogLevel, _threshold: LogLevel, data: LogData) -> Option<LogData> {
    let is_health = data.get("path").and_then(FieldValue::as_str) == Some("/health");
    if is_health && !level.is_at_least(LogLevel::Error) {
        None
    } else {
        Some(data)
    }
}

/// Keeps only the first 8 characters of user identifiers
struct TruncateUser;

impl Filter for TruncateUser {
    fn apply(&self, _level: LogLevel, _threshold: LogLevel, mut data: LogData) -> Option<LogData> {
        if let Some(FieldValue::String(user)) = data.get_mut("user") {
            if let Some((cut, _)) = user.char_indices().nth(8) {
                user.truncate(cut);
            }
        }
        Some(data)
    }

    fn name(&self) -> &str {
        "truncate_user"
    }
}

struct AlwaysFails;

impl Encoder for AlwaysFails {
    fn encode(&self, _data: &LogData) -> Result<()> {
        Err(LoggerError::other("disk full"))
    }

    fn name(&self) -> &str {
        "always_fails"
    }
}

fn main() {
    println!("=== Rust Log Facade - Custom Filters Example ===\n");

    let logger = Logger::builder(JsonEncoder::stdout())
        .threshold(LogLevel::Info)
        .filter(threshold)
        .filter(skip_health_checks)
        .filter(TruncateUser)
        .filter(|level: LogLevel, _: LogLevel, data: LogData| {
            Some(data.with_field("severity", level.rank() as i64))
        })
        .filter(RequireKeys::new(["msg"]))
        .build();

    println!("1. Filter chain: {:?}", logger.filters().names());

    println!("\n2. Events passing through the chain:");
    logger.info(LogData::new().with_field("msg", "request").with_field("path", "/api"));
    logger.info(LogData::new().with_field("msg", "probe").with_field("path", "/health"));
    logger.error(LogData::new().with_field("msg", "probe failed").with_field("path", "/health"));
    logger.info(
        LogData::new()
            .with_field("msg", "login")
            .with_field("user", "a-very-long-user-identifier"),
    );
    logger.info(
        LogData::new()
            .with_field("msg", "login")
            .with_field("user", "ユーザー識別子の長い名前"),
    );
    logger.info(LogData::new().with_field("note", "no msg key, dropped"));

    println!("\n3. Encoder failures go to the diagnostic sink:");
    let sink = |message: &str| println!("   diagnostic: {}", message);
    let failing = Logger::builder(AlwaysFails)
        .diagnostics(Arc::new(sink))
        .build();
    failing.error(LogData::new().with_field("msg", "this cannot be written"));

    println!("\n4. Metrics:");
    let metrics = logger.metrics();
    println!(
        "   encoded={} filtered={} failed={}",
        metrics.encoded_count(),
        metrics.filtered_count(),
        metrics.failed_count()
    );

    println!("\n=== Example completed successfully! ===");
}
