//! Structured payload for log events
//!
//! This module provides:
//! - `FieldValue`: a single heterogeneous field value
//! - `LogData`: the string-keyed payload handed to `Logger::log`

use serde::{Deserialize, Serialize};
use std::collections::hash_map::{self, HashMap};
use std::collections::BTreeMap;
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
            FieldValue::List(_) | FieldValue::Map(_) => {
                write!(f, "{}", self.to_json_value())
            }
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON serialization
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::List(items) => {
                serde_json::Value::Array(items.iter().map(FieldValue::to_json_value).collect())
            }
            FieldValue::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json_value()))
                    .collect(),
            ),
        }
    }

    /// Returns the string slice if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` if this value, or any value nested inside it, is a
    /// NaN or infinite float.
    pub fn has_non_finite(&self) -> bool {
        match self {
            FieldValue::Float(f) => !f.is_finite(),
            FieldValue::List(items) => items.iter().any(FieldValue::has_non_finite),
            FieldValue::Map(map) => map.values().any(FieldValue::has_non_finite),
            _ => false,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<LogData> for FieldValue {
    fn from(data: LogData) -> Self {
        FieldValue::Map(data.fields.into_iter().collect())
    }
}

/// Payload of one structured log event
///
/// Keys are unique strings; values are arbitrary [`FieldValue`]s. The
/// payload is moved into [`Logger::log`](crate::Logger::log) and may be
/// rewritten by any filter on its way to the encoder.
///
/// An empty `LogData` is a valid payload. Filters signal a drop by returning
/// `None`, never by emptying the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogData {
    fields: HashMap<String, FieldValue>,
}

impl LogData {
    /// Create a new empty payload
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Add a field to the payload
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Insert a field, returning the previous value under that key
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<FieldValue>
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut FieldValue> {
        self.fields.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.fields.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Move the value stored under `from` to `to`
    ///
    /// Returns `false` and leaves the payload untouched when `from` is
    /// absent. An existing value under `to` is overwritten.
    pub fn rename(&mut self, from: &str, to: impl Into<String>) -> bool {
        match self.fields.remove(from) {
            Some(value) => {
                self.fields.insert(to.into(), value);
                true
            }
            None => false,
        }
    }

    /// Copy every field of `other` whose key is not already present
    ///
    /// Existing fields take priority.
    pub fn merge_missing(&mut self, other: &LogData) {
        for (key, value) in other.fields.iter() {
            if !self.fields.contains_key(key) {
                self.fields.insert(key.clone(), value.clone());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }

    pub fn iter_mut(&mut self) -> hash_map::IterMut<'_, String, FieldValue> {
        self.fields.iter_mut()
    }

    /// Get all fields
    pub fn fields(&self) -> &HashMap<String, FieldValue> {
        &self.fields
    }

    /// Fields sorted by key, for deterministic text output
    pub fn sorted(&self) -> Vec<(&String, &FieldValue)> {
        let mut fields: Vec<_> = self.fields.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));
        fields
    }

    /// Format fields as key=value pairs, sorted by key
    pub fn format_fields(&self) -> String {
        self.sorted()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for LogData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

impl<K, V> FromIterator<(K, V)> for LogData
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for LogData {
    type Item = (String, FieldValue);
    type IntoIter = hash_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogData {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = hash_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
