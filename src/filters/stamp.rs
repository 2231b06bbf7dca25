//! Filters that stamp event metadata into the payload
//!
//! Encoders only ever see the payload, so the event level and time reach
//! the output through these.

use crate::core::{Filter, LogData, LogLevel, TimestampFormat};
use chrono::Utc;

/// Inserts the event level name under `key` (default `"level"`)
#[derive(Debug, Clone)]
pub struct LevelTag {
    key: String,
}

impl LevelTag {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LevelTag {
    fn default() -> Self {
        Self::new("level")
    }
}

impl Filter for LevelTag {
    fn apply(&self, level: LogLevel, _threshold: LogLevel, mut data: LogData) -> Option<LogData> {
        data.insert(self.key.clone(), level.to_str());
        Some(data)
    }

    fn name(&self) -> &str {
        "level_tag"
    }
}

/// Inserts the current UTC time under `key` (default `"timestamp"`)
#[derive(Debug, Clone)]
pub struct Timestamp {
    key: String,
    format: TimestampFormat,
}

impl Timestamp {
    pub fn new(key: impl Into<String>, format: TimestampFormat) -> Self {
        Self {
            key: key.into(),
            format,
        }
    }

    /// Use `format` under the default key
    pub fn with_format(format: TimestampFormat) -> Self {
        Self::new("timestamp", format)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::with_format(TimestampFormat::default())
    }
}

impl Filter for Timestamp {
    fn apply(&self, _level: LogLevel, _threshold: LogLevel, mut data: LogData) -> Option<LogData> {
        data.insert(self.key.clone(), self.format.to_field_value(&Utc::now()));
        Some(data)
    }

    fn name(&self) -> &str {
        "timestamp"
    }
}
