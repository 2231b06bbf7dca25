//! # Rust Log Facade
//!
//! A minimal structured-logging facade: a severity level and a key-value
//! payload go in, an ordered chain of filters may drop or rewrite the
//! payload, and whatever survives is handed to a pluggable encoder.
//!
//! ## Features
//!
//! - **Four fixed levels**: Fatal, Error, Info, Trace
//! - **Composable filters**: plain functions or closures, applied in order
//! - **Pluggable encoders**: JSON, logfmt, text/console, channel
//! - **Never fails the caller**: encoder errors go to a diagnostic side channel
//!
//! ## Example
//!
//! ```
//! use rust_log_facade::prelude::*;
//!
//! let logger = Logger::builder(JsonEncoder::stdout())
//!     .threshold(LogLevel::Info)
//!     .threshold_filter()
//!     .filter(LevelTag::default())
//!     .build();
//!
//! logger.info(LogData::new().with_field("msg", "server started").with_field("port", 8080));
//! logger.trace(LogData::new().with_field("msg", "dropped by the threshold"));
//! ```

pub mod core;
pub mod encoders;
pub mod filters;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        DiagnosticSink, Destination, Encoder, FieldValue, Filter, FilterChain, LogData, LogLevel,
        Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, MemoryDiagnostics,
        OutputFormat, Result, StderrDiagnostics, TimestampFormat,
    };
    pub use crate::encoders::{ChannelEncoder, ConsoleEncoder, JsonEncoder, LogfmtEncoder, TextEncoder};
    pub use crate::filters::{
        Enrich, LevelTag, MinLevel, Redact, RenameKey, RequireKeys, Sanitize, Threshold, Timestamp,
    };
}

pub use crate::core::{
    DiagnosticSink, Destination, Encoder, FieldValue, Filter, FilterChain, LogData, LogLevel,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, MemoryDiagnostics,
    OutputFormat, Result, StderrDiagnostics, TimestampFormat,
};
pub use encoders::{ChannelEncoder, ConsoleEncoder, JsonEncoder, LogfmtEncoder, TextEncoder};
