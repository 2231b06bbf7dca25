//! Logfmt encoder (key=value pairs)

use crate::core::{Encoder, FieldValue, LogData, Result};
use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes each payload as one line of `key=value` pairs sorted by key
///
/// Example: `latency_ms=42 level=INFO msg="request done"`
pub struct LogfmtEncoder<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> LogfmtEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Format a payload as a logfmt line, without the trailing newline
    pub fn format(data: &LogData) -> String {
        data.sorted()
            .into_iter()
            .map(|(key, value)| format!("{}={}", escape_key(key), format_value(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl LogfmtEncoder<BufWriter<File>> {
    /// Create a logfmt encoder appending to `path`
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(super::open_append(path.as_ref())?))
    }
}

impl LogfmtEncoder<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl LogfmtEncoder<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> Encoder for LogfmtEncoder<W> {
    fn encode(&self, data: &LogData) -> Result<()> {
        let mut line = Self::format(data);
        line.push('\n');
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "logfmt"
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

/// Strip everything but alphanumerics, `_` and `-` from a key
fn escape_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) => escape_value(s),
        FieldValue::List(_) | FieldValue::Map(_) => escape_value(&value.to_string()),
        other => other.to_string(),
    }
}

/// Quote a value if it is empty or contains spaces, quotes or `=`
fn escape_value(value: &str) -> String {
    if value.is_empty() || value.contains(&[' ', '"', '=', '\n'][..]) {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n"))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logfmt_sorted_pairs() {
        let data = LogData::new()
            .with_field("user", "alice")
            .with_field("count", 5)
            .with_field("ok", true);

        assert_eq!(LogfmtEncoder::<Vec<u8>>::format(&data), "count=5 ok=true user=alice");
    }

    #[test]
    fn test_logfmt_quotes_special_values() {
        let data = LogData::new()
            .with_field("query", "SELECT * FROM users WHERE id=1")
            .with_field("empty", "")
            .with_field("quote", "say \"hi\"");

        let line = LogfmtEncoder::<Vec<u8>>::format(&data);
        assert!(line.contains("query=\"SELECT * FROM users WHERE id=1\""));
        assert!(line.contains("empty=\"\""));
        assert!(line.contains(r#"quote="say \"hi\"""#));
    }

    #[test]
    fn test_logfmt_escapes_keys() {
        let data = LogData::new().with_field("bad key=", 1);
        assert_eq!(LogfmtEncoder::<Vec<u8>>::format(&data), "badkey=1");
    }

    #[test]
    fn test_logfmt_encoder_writes_lines() -> Result<()> {
        let encoder = LogfmtEncoder::new(Vec::new());
        encoder.encode(&LogData::new().with_field("msg", "x"))?;
        encoder.encode(&LogData::new())?;

        let output = String::from_utf8(encoder.into_inner()).unwrap();
        assert_eq!(output, "msg=x\n\n");
        Ok(())
    }
}
