//! Declarative logger configuration
//!
//! `LoggerConfig` describes a ready-to-use logger: threshold, output format,
//! destination and the standard filter set. It deserializes with serde, so
//! it can live in whatever configuration file the application already has.
//!
//! # Example
//!
//! ```
//! use rust_log_facade::prelude::*;
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "threshold": "error",
//!     "format": "logfmt",
//!     "redact": ["password"],
//!     "fields": {"service": "api-gateway"}
//! }"#).unwrap();
//!
//! let logger = config.build().unwrap();
//! assert_eq!(logger.threshold(), LogLevel::Error);
//! ```

use super::{
    diagnostics::{DiagnosticSink, StderrDiagnostics},
    encoder::Encoder,
    error::{LoggerError, Result},
    log_data::LogData,
    log_level::LogLevel,
    logger::Logger,
    timestamp::TimestampFormat,
};
use crate::encoders::{text::DEFAULT_LEVEL_KEY, ConsoleEncoder, JsonEncoder, LogfmtEncoder, TextEncoder};
use crate::filters::{Enrich, LevelTag, Redact, Sanitize, Timestamp};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Output format of the configured encoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One JSON object per line (default)
    #[default]
    Json,

    /// `key=value` pairs
    Logfmt,

    /// Human-readable `[LEVEL] key=value` lines; colored on stdout
    Text,
}

/// Where the configured encoder writes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    #[default]
    Stdout,
    Stderr,
    /// Append to a file, creating it if needed
    File(PathBuf),
}

/// Configuration for building a [`Logger`]
///
/// Missing fields take their default values. The filter chain is assembled
/// in a fixed order: threshold, sanitize, enrich, redact, level tag,
/// timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Least severe level that passes the threshold filter
    pub threshold: LogLevel,

    pub format: OutputFormat,

    pub destination: Destination,

    /// Pretty-print JSON output
    pub pretty: bool,

    /// Colorize the level label on a text console
    pub colors: bool,

    /// Stamp the event time into each payload; `None` disables it
    pub timestamp: Option<TimestampFormat>,

    /// Key the event level is stored under; `None` disables it
    pub level_key: Option<String>,

    /// Keys whose values are replaced with `[REDACTED]`
    pub redact: Vec<String>,

    /// Static fields added to every event
    pub fields: LogData,

    /// Escape control characters in string values
    pub sanitize: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            threshold: LogLevel::Info,
            format: OutputFormat::Json,
            destination: Destination::Stdout,
            pretty: false,
            colors: true,
            timestamp: Some(TimestampFormat::Iso8601),
            level_key: Some(DEFAULT_LEVEL_KEY.to_string()),
            redact: Vec::new(),
            fields: LogData::new(),
            sanitize: true,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_threshold(mut self, level: LogLevel) -> Self {
        self.threshold = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<super::log_data::FieldValue>,
    {
        self.fields.insert(key, value);
        self
    }

    #[must_use]
    pub fn with_redact(mut self, key: impl Into<String>) -> Self {
        self.redact.push(key.into());
        self
    }

    /// Check the configuration for values that cannot produce a logger
    pub fn validate(&self) -> Result<()> {
        if matches!(self.level_key.as_deref(), Some("")) {
            return Err(LoggerError::config("LoggerConfig", "level_key must not be empty"));
        }
        if self.redact.iter().any(String::is_empty) {
            return Err(LoggerError::config("Redact", "redacted keys must not be empty"));
        }
        if let Destination::File(path) = &self.destination {
            if path.as_os_str().is_empty() {
                return Err(LoggerError::config("Destination", "file path must not be empty"));
            }
        }
        if let Some(format) = &self.timestamp {
            format.validate()?;
        }
        Ok(())
    }

    /// Build a logger reporting encoder failures on stderr
    pub fn build(&self) -> Result<Logger> {
        self.build_with_diagnostics(Arc::new(StderrDiagnostics))
    }

    /// Build a logger reporting encoder failures to `diagnostics`
    pub fn build_with_diagnostics(&self, diagnostics: Arc<dyn DiagnosticSink>) -> Result<Logger> {
        self.validate()?;

        let mut builder = Logger::builder(self.encoder()?)
            .threshold(self.threshold)
            .threshold_filter()
            .diagnostics(diagnostics);

        if self.sanitize {
            builder = builder.filter(Sanitize);
        }
        if !self.fields.is_empty() {
            builder = builder.filter(Enrich::new(self.fields.clone()));
        }
        if !self.redact.is_empty() {
            builder = builder.filter(Redact::new(self.redact.iter().cloned()));
        }
        if let Some(key) = &self.level_key {
            builder = builder.filter(LevelTag::new(key.clone()));
        }
        if let Some(format) = &self.timestamp {
            builder = builder.filter(Timestamp::with_format(format.clone()));
        }

        Ok(builder.build())
    }

    fn encoder(&self) -> Result<Box<dyn Encoder>> {
        let level_key = self.level_key.as_deref().unwrap_or(DEFAULT_LEVEL_KEY);

        let encoder: Box<dyn Encoder> = match (&self.format, &self.destination) {
            (OutputFormat::Json, Destination::Stdout) => {
                Box::new(JsonEncoder::stdout().with_pretty(self.pretty))
            }
            (OutputFormat::Json, Destination::Stderr) => {
                Box::new(JsonEncoder::stderr().with_pretty(self.pretty))
            }
            (OutputFormat::Json, Destination::File(path)) => {
                Box::new(JsonEncoder::file(path)?.with_pretty(self.pretty))
            }
            (OutputFormat::Logfmt, Destination::Stdout) => Box::new(LogfmtEncoder::stdout()),
            (OutputFormat::Logfmt, Destination::Stderr) => Box::new(LogfmtEncoder::stderr()),
            (OutputFormat::Logfmt, Destination::File(path)) => {
                Box::new(LogfmtEncoder::file(path)?)
            }
            (OutputFormat::Text, Destination::Stdout) => Box::new(
                ConsoleEncoder::with_colors(self.colors).with_level_key(level_key),
            ),
            (OutputFormat::Text, Destination::Stderr) => {
                Box::new(TextEncoder::stderr().with_level_key(level_key))
            }
            (OutputFormat::Text, Destination::File(path)) => {
                Box::new(TextEncoder::file(path)?.with_level_key(level_key))
            }
        };

        Ok(encoder)
    }
}
