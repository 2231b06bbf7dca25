//! Log injection prevention

use crate::core::{FieldValue, Filter, LogData, LogLevel};

/// Escapes newlines, carriage returns and tabs in string values
///
/// Keeps line-oriented sinks one event per line even when a field carries
/// attacker-controlled text. Nested lists and maps are sanitized too.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitize;

impl Sanitize {
    fn sanitize_str(value: &str) -> String {
        value
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn sanitize_value(value: &mut FieldValue) {
        match value {
            FieldValue::String(s) => {
                if s.contains(&['\n', '\r', '\t'][..]) {
                    *s = Self::sanitize_str(s);
                }
            }
            FieldValue::List(items) => items.iter_mut().for_each(Self::sanitize_value),
            FieldValue::Map(map) => map.values_mut().for_each(Self::sanitize_value),
            _ => {}
        }
    }
}

impl Filter for Sanitize {
    fn apply(&self, _level: LogLevel, _threshold: LogLevel, mut data: LogData) -> Option<LogData> {
        for (_, value) in data.iter_mut() {
            Self::sanitize_value(value);
        }
        Some(data)
    }

    fn name(&self) -> &str {
        "sanitize"
    }
}
