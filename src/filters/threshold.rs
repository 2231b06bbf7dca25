//! Severity gates

use crate::core::{Filter, LogData, LogLevel};

/// Drops events less severe than the logger threshold
///
/// ```
/// use rust_log_facade::filters::threshold;
/// use rust_log_facade::{LogData, LogLevel};
///
/// assert!(threshold(LogLevel::Fatal, LogLevel::Error, LogData::new()).is_some());
/// assert!(threshold(LogLevel::Info, LogLevel::Error, LogData::new()).is_none());
/// ```
pub fn threshold(level: LogLevel, threshold: LogLevel, data: LogData) -> Option<LogData> {
    level.is_at_least(threshold).then_some(data)
}

/// Named wrapper around [`threshold`], used by `LoggerBuilder::threshold_filter`
#[derive(Debug, Clone, Copy, Default)]
pub struct Threshold;

impl Filter for Threshold {
    fn apply(&self, level: LogLevel, threshold_level: LogLevel, data: LogData) -> Option<LogData> {
        threshold(level, threshold_level, data)
    }

    fn name(&self) -> &str {
        "threshold"
    }
}

/// Drops events less severe than a fixed level, ignoring the logger threshold
///
/// Useful for a second, stricter gate later in the chain, e.g. after an
/// enrichment step that should only run for verbose loggers.
#[derive(Debug, Clone, Copy)]
pub struct MinLevel(pub LogLevel);

impl Filter for MinLevel {
    fn apply(&self, level: LogLevel, _threshold: LogLevel, data: LogData) -> Option<LogData> {
        level.is_at_least(self.0).then_some(data)
    }

    fn name(&self) -> &str {
        "min_level"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_error() {
        let data = LogData::new().with_field("msg", "x");

        assert!(threshold(LogLevel::Fatal, LogLevel::Error, data.clone()).is_some());
        assert!(threshold(LogLevel::Error, LogLevel::Error, data.clone()).is_some());
        assert!(threshold(LogLevel::Info, LogLevel::Error, data.clone()).is_none());
        assert!(threshold(LogLevel::Trace, LogLevel::Error, data).is_none());
    }

    #[test]
    fn test_threshold_passes_payload_unchanged() {
        let data = LogData::new().with_field("msg", "x");
        assert_eq!(Threshold.apply(LogLevel::Info, LogLevel::Trace, data.clone()), Some(data));
    }

    #[test]
    fn test_min_level_ignores_logger_threshold() {
        let gate = MinLevel(LogLevel::Fatal);

        assert!(gate.apply(LogLevel::Error, LogLevel::Trace, LogData::new()).is_none());
        assert!(gate.apply(LogLevel::Fatal, LogLevel::Trace, LogData::new()).is_some());
    }
}
