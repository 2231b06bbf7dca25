//! Core logger types and traits

pub mod config;
pub mod diagnostics;
pub mod encoder;
pub mod error;
pub mod filter;
pub mod log_data;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use config::{Destination, LoggerConfig, OutputFormat};
pub use diagnostics::{DiagnosticSink, MemoryDiagnostics, StderrDiagnostics};
pub use encoder::Encoder;
pub use error::{LoggerError, Result};
pub use filter::{Filter, FilterChain};
pub use log_data::{FieldValue, LogData};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
