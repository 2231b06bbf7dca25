//! Filters that add, hide, move or require payload keys

use crate::core::{FieldValue, Filter, LogData, LogLevel};

/// Placeholder written over redacted values
pub const REDACTED: &str = "[REDACTED]";

/// Adds static fields to every event
///
/// Fields already present in the payload take priority, so a call site can
/// still override e.g. `service` for a single event.
///
/// ```
/// use rust_log_facade::filters::Enrich;
/// use rust_log_facade::{Filter, LogData, LogLevel};
///
/// let enrich = Enrich::new(LogData::new().with_field("service", "api-gateway"));
/// let out = enrich.apply(LogLevel::Info, LogLevel::Info, LogData::new()).unwrap();
/// assert!(out.contains_key("service"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Enrich {
    fields: LogData,
}

impl Enrich {
    pub fn new(fields: LogData) -> Self {
        Self { fields }
    }

    /// Add a single static field
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key, value);
        self
    }
}

impl Filter for Enrich {
    fn apply(&self, _level: LogLevel, _threshold: LogLevel, mut data: LogData) -> Option<LogData> {
        data.merge_missing(&self.fields);
        Some(data)
    }

    fn name(&self) -> &str {
        "enrich"
    }
}

/// Replaces the values of sensitive keys with [`REDACTED`]
#[derive(Debug, Clone, Default)]
pub struct Redact {
    keys: Vec<String>,
}

impl Redact {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl Filter for Redact {
    fn apply(&self, _level: LogLevel, _threshold: LogLevel, mut data: LogData) -> Option<LogData> {
        for key in &self.keys {
            if let Some(value) = data.get_mut(key) {
                *value = FieldValue::from(REDACTED);
            }
        }
        Some(data)
    }

    fn name(&self) -> &str {
        "redact"
    }
}

/// Moves the value under `from` to `to`; no-op when `from` is absent
#[derive(Debug, Clone)]
pub struct RenameKey {
    from: String,
    to: String,
}

impl RenameKey {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Filter for RenameKey {
    fn apply(&self, _level: LogLevel, _threshold: LogLevel, mut data: LogData) -> Option<LogData> {
        data.rename(&self.from, self.to.clone());
        Some(data)
    }

    fn name(&self) -> &str {
        "rename_key"
    }
}

/// Drops events that lack any of the listed keys
#[derive(Debug, Clone, Default)]
pub struct RequireKeys {
    keys: Vec<String>,
}

impl RequireKeys {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for RequireKeys {
    fn apply(&self, _level: LogLevel, _threshold: LogLevel, data: LogData) -> Option<LogData> {
        self.keys
            .iter()
            .all(|key| data.contains_key(key))
            .then_some(data)
    }

    fn name(&self) -> &str {
        "require_keys"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<F: Filter>(filter: &F, data: LogData) -> Option<LogData> {
        filter.apply(LogLevel::Info, LogLevel::Info, data)
    }

    #[test]
    fn test_enrich_adds_missing_fields() {
        let enrich = Enrich::default()
            .with_field("service", "api")
            .with_field("version", "1.2.3");

        let out = run(&enrich, LogData::new().with_field("msg", "x")).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out.get("version"), Some(&FieldValue::from("1.2.3")));
    }

    #[test]
    fn test_enrich_entry_fields_win() {
        let enrich = Enrich::default().with_field("service", "api");

        let out = run(&enrich, LogData::new().with_field("service", "worker")).unwrap();
        assert_eq!(out.get("service"), Some(&FieldValue::from("worker")));
    }

    #[test]
    fn test_redact() {
        let redact = Redact::new(["password", "token"]);
        let data = LogData::new()
            .with_field("user", "alice")
            .with_field("password", "hunter2");

        let out = run(&redact, data).unwrap();
        assert_eq!(out.get("password"), Some(&FieldValue::from(REDACTED)));
        assert_eq!(out.get("user"), Some(&FieldValue::from("alice")));
        assert!(!out.contains_key("token"));
    }

    #[test]
    fn test_rename_key() {
        let rename = RenameKey::new("msg", "message");

        let out = run(&rename, LogData::new().with_field("msg", "hello")).unwrap();
        assert_eq!(out.get("message"), Some(&FieldValue::from("hello")));
        assert!(!out.contains_key("msg"));

        let untouched = run(&rename, LogData::new().with_field("other", 1)).unwrap();
        assert_eq!(untouched, LogData::new().with_field("other", 1));
    }

    #[test]
    fn test_require_keys() {
        let require = RequireKeys::new(["request_id"]);

        assert!(run(&require, LogData::new()).is_none());
        assert!(run(&require, LogData::new().with_field("request_id", "abc")).is_some());
    }
}
