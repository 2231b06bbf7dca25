//! Timestamp formats used by the timestamp filter
//!
//! Supports ISO 8601, RFC 3339, Unix timestamps, and custom strftime formats.
//! Numeric formats become integer fields so JSON consumers can sort on them.

use super::{
    error::{LoggerError, Result},
    log_data::FieldValue,
};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Standardized timestamp format options
///
/// Deserializes from snake_case names (`"iso8601"`, `"unix_millis"`) or
/// `{"custom": "<strftime>"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Unix timestamp in microseconds: `1736332245123456`
    UnixMicros,

    /// Custom strftime format
    ///
    /// ```
    /// use rust_log_facade::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(format_str) => {
                // chrono signals a bad specifier through fmt::Error
                let mut out = String::new();
                match write!(out, "{}", datetime.format(format_str)) {
                    Ok(()) => out,
                    Err(_) => TimestampFormat::Iso8601.format(datetime),
                }
            }
        }
    }

    /// Reject custom formats chrono cannot render
    pub fn validate(&self) -> Result<()> {
        let TimestampFormat::Custom(format_str) = self else {
            return Ok(());
        };
        if format_str.is_empty() {
            return Err(LoggerError::config("Timestamp", "custom format must not be empty"));
        }
        if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "Timestamp",
                format!("invalid strftime format '{}'", format_str),
            ));
        }
        Ok(())
    }

    /// Render a `DateTime<Utc>` as a payload field
    ///
    /// Unix formats produce `FieldValue::Int`, everything else a string.
    #[must_use]
    pub fn to_field_value(&self, datetime: &DateTime<Utc>) -> FieldValue {
        match self {
            TimestampFormat::Unix => FieldValue::Int(datetime.timestamp()),
            TimestampFormat::UnixMillis => FieldValue::Int(datetime.timestamp_millis()),
            TimestampFormat::UnixMicros => FieldValue::Int(datetime.timestamp_micros()),
            _ => FieldValue::String(self.format(datetime)),
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TimestampFormat::Unix | TimestampFormat::UnixMillis | TimestampFormat::UnixMicros
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601_formats() {
        let dt = fixed_datetime();
        assert_eq!(TimestampFormat::Iso8601.format(&dt), "2025-01-08T10:30:45.123Z");
        assert_eq!(
            TimestampFormat::Iso8601Micros.format(&dt),
            "2025-01-08T10:30:45.123456Z"
        );
        assert!(TimestampFormat::Rfc3339.format(&dt).starts_with("2025-01-08T10:30:45"));
    }

    #[test]
    fn test_invalid_custom_format_falls_back_to_iso8601() {
        let dt = fixed_datetime();
        let format = TimestampFormat::Custom("%Y %Q".to_string());
        assert_eq!(format.format(&dt), "2025-01-08T10:30:45.123Z");
        assert_eq!(
            format.to_field_value(&dt),
            FieldValue::String("2025-01-08T10:30:45.123Z".to_string())
        );
    }

    #[test]
    fn test_validate_custom_format() {
        assert!(TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string())
            .validate()
            .is_ok());
        assert!(TimestampFormat::Unix.validate().is_ok());

        let err = TimestampFormat::Custom("%Q".to_string()).validate().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("%Q"));
        assert!(TimestampFormat::Custom(String::new()).validate().is_err());
    }

    #[test]
    fn test_unix_formats() {
        let dt = fixed_datetime();
        assert_eq!(TimestampFormat::Unix.format(&dt), "1736332245");
        assert_eq!(TimestampFormat::UnixMillis.format(&dt), "1736332245123");
        assert_eq!(TimestampFormat::UnixMicros.format(&dt), "1736332245123456");
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S +0000".to_string());
        assert_eq!(format.format(&fixed_datetime()), "08/Jan/2025:10:30:45 +0000");
    }

    #[test]
    fn test_to_field_value() {
        let dt = fixed_datetime();
        assert_eq!(
            TimestampFormat::UnixMillis.to_field_value(&dt),
            FieldValue::Int(1736332245123)
        );
        assert_eq!(
            TimestampFormat::Iso8601.to_field_value(&dt),
            FieldValue::from("2025-01-08T10:30:45.123Z")
        );
    }

    #[test]
    fn test_is_numeric() {
        assert!(TimestampFormat::Unix.is_numeric());
        assert!(TimestampFormat::UnixMicros.is_numeric());
        assert!(!TimestampFormat::Rfc3339.is_numeric());
        assert!(!TimestampFormat::Custom("%s".to_string()).is_numeric());
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat = serde_json::from_str("\"unix_millis\"").unwrap();
        assert_eq!(format, TimestampFormat::UnixMillis);

        let format: TimestampFormat = serde_json::from_str(r#"{"custom":"%Y-%m-%d"}"#).unwrap();
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
