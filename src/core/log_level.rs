//! Log level definitions
//!
//! Levels are ordered most severe first: `Fatal < Error < Info < Trace` in
//! terms of the derived `Ord`, which follows the numeric discriminant. A
//! lower value always means a more severe event.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// The application has failed and is left in an unpredictable state.
    Fatal = 0,
    /// Something went wrong, but the application can continue.
    Error = 1,
    /// Something happened that is worth noting.
    #[default]
    Info = 2,
    /// Something happened.
    Trace = 3,
}

impl LogLevel {
    /// All levels, most severe first.
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Info,
        LogLevel::Trace,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Numeric rank of the level; 0 is the most severe.
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns `true` if this level is as severe as `threshold` or more.
    ///
    /// ```
    /// use rust_log_facade::LogLevel;
    ///
    /// assert!(LogLevel::Error.is_at_least(LogLevel::Info));
    /// assert!(LogLevel::Info.is_at_least(LogLevel::Info));
    /// assert!(!LogLevel::Trace.is_at_least(LogLevel::Info));
    /// ```
    #[inline]
    pub const fn is_at_least(self, threshold: LogLevel) -> bool {
        self.rank() <= threshold.rank()
    }

    /// Returns `true` if this level is strictly more severe than `other`.
    #[inline]
    pub const fn is_more_severe_than(self, other: LogLevel) -> bool {
        self.rank() < other.rank()
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Fatal => BrightRed,
            LogLevel::Error => Red,
            LogLevel::Info => Green,
            LogLevel::Trace => BrightBlack,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "INFO" => Ok(LogLevel::Info),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.to_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
