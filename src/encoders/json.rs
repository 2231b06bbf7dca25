//! JSON encoder for structured logging

use crate::core::{Encoder, LogData, LoggerError, Result};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes each payload as a single-line JSON object (JSONL format)
///
/// Compatible with log aggregation tools like ELK, Loki, etc. Keys are
/// written in sorted order. Payloads holding NaN or infinite floats are
/// rejected because JSON cannot represent them.
pub struct JsonEncoder<W: Write + Send> {
    writer: Mutex<W>,
    pretty: bool,
}

impl<W: Write + Send> JsonEncoder<W> {
    /// Create a JSON encoder over any writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            pretty: false,
        }
    }

    /// Enable or disable pretty printing
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Consume the encoder and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn render(&self, data: &LogData) -> Result<Vec<u8>> {
        if let Some((key, _)) = data.iter().find(|(_, v)| v.has_non_finite()) {
            return Err(LoggerError::encoding(
                "json",
                format!("field '{}' holds a non-finite float", key),
            ));
        }

        let ordered: BTreeMap<&String, _> = data.iter().collect();
        let mut line = if self.pretty {
            serde_json::to_vec_pretty(&ordered)?
        } else {
            serde_json::to_vec(&ordered)?
        };
        line.push(b'\n');
        Ok(line)
    }
}

impl JsonEncoder<BufWriter<File>> {
    /// Create a JSON encoder appending to `path`
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(super::open_append(path.as_ref())?))
    }
}

impl JsonEncoder<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl JsonEncoder<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> Encoder for JsonEncoder<W> {
    fn encode(&self, data: &LogData) -> Result<()> {
        let line = self.render(data)?;
        let mut writer = self.writer.lock();
        writer.write_all(&line)?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_json_encoder_single_line() -> Result<()> {
        let encoder = JsonEncoder::new(Vec::new());

        let data = LogData::new()
            .with_field("user_id", 123)
            .with_field("action", "login");
        encoder.encode(&data)?;

        let output = String::from_utf8(encoder.into_inner()).unwrap();
        assert_eq!(output, "{\"action\":\"login\",\"user_id\":123}\n");
        Ok(())
    }

    #[test]
    fn test_json_encoder_empty_payload() -> Result<()> {
        let encoder = JsonEncoder::new(Vec::new());
        encoder.encode(&LogData::new())?;

        assert_eq!(encoder.into_inner(), b"{}\n");
        Ok(())
    }

    #[test]
    fn test_json_encoder_rejects_non_finite() {
        let encoder = JsonEncoder::new(Vec::new());
        let data = LogData::new().with_field("ratio", f64::NAN);

        let err = encoder.encode(&data).unwrap_err();
        assert!(matches!(err, LoggerError::Encoding { .. }));
        assert!(err.to_string().contains("ratio"));
        assert!(encoder.into_inner().is_empty());
    }

    #[test]
    fn test_json_encoder_pretty() -> Result<()> {
        let encoder = JsonEncoder::new(Vec::new()).with_pretty(true);
        encoder.encode(&LogData::new().with_field("msg", "x"))?;

        let output = String::from_utf8(encoder.into_inner()).unwrap();
        assert!(output.contains("\n  \"msg\": \"x\"\n"));
        Ok(())
    }

    #[test]
    fn test_json_encoder_file_multiple_entries() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test_multiple.jsonl");

        let encoder = JsonEncoder::file(&log_path)?;
        for i in 0..5 {
            encoder.encode(&LogData::new().with_field("iteration", i))?;
        }
        encoder.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);

        for (i, line) in lines.into_iter().enumerate() {
            let parsed: serde_json::Value = serde_json::from_str(line)?;
            assert_eq!(parsed["iteration"], i as i64);
        }
        Ok(())
    }

    #[test]
    fn test_json_encoder_file_visible_before_drop() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("live.jsonl");

        let encoder = JsonEncoder::file(&log_path)?;
        encoder.encode(&LogData::new().with_field("msg", "fatal before exit"))?;

        let content = fs::read_to_string(&log_path)?;
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("fatal before exit"));
        drop(encoder);
        Ok(())
    }

    #[test]
    fn test_json_encoder_file_open_error() {
        let dir = tempdir().unwrap();
        let bad_path = dir.path().join("missing").join("app.jsonl");

        let err = JsonEncoder::file(&bad_path).err().unwrap();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
