//! Human-readable text and console encoders

use crate::core::{Encoder, LogData, LogLevel, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Key the text encoders read the event level from
pub const DEFAULT_LEVEL_KEY: &str = "level";

/// Line layout shared by [`TextEncoder`] and [`ConsoleEncoder`]
///
/// Produces `[LEVEL] key=value ...` when the payload carries a level field
/// (see [`LevelTag`](crate::filters::LevelTag)), otherwise just the sorted
/// `key=value` pairs.
#[derive(Debug, Clone)]
struct TextLayout {
    level_key: String,
    use_colors: bool,
}

impl TextLayout {
    fn level_of(&self, data: &LogData) -> Option<LogLevel> {
        data.get(&self.level_key)
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse().ok())
    }

    fn format(&self, data: &LogData) -> String {
        let fields = data
            .sorted()
            .into_iter()
            .filter(|(k, _)| **k != self.level_key)
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ");

        match self.level_of(data) {
            Some(level) if fields.is_empty() => format!("[{}]", self.level_label(level)),
            Some(level) => format!("[{}] {}", self.level_label(level), fields),
            None => fields,
        }
    }

    #[cfg(feature = "console")]
    fn level_label(&self, level: LogLevel) -> String {
        let label = format!("{:5}", level.to_str());
        if self.use_colors {
            label.color(level.color_code()).to_string()
        } else {
            label
        }
    }

    #[cfg(not(feature = "console"))]
    fn level_label(&self, level: LogLevel) -> String {
        format!("{:5}", level.to_str())
    }
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            level_key: DEFAULT_LEVEL_KEY.to_string(),
            use_colors: false,
        }
    }
}

/// Writes human-readable lines to any writer, without colors
pub struct TextEncoder<W: Write + Send> {
    writer: Mutex<W>,
    layout: TextLayout,
}

impl<W: Write + Send> TextEncoder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            layout: TextLayout::default(),
        }
    }

    /// Read the level from `key` instead of `"level"`
    #[must_use]
    pub fn with_level_key(mut self, key: impl Into<String>) -> Self {
        self.layout.level_key = key.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl TextEncoder<BufWriter<File>> {
    /// Create a text encoder appending to `path`
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(super::open_append(path.as_ref())?))
    }
}

impl TextEncoder<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> Encoder for TextEncoder<W> {
    fn encode(&self, data: &LogData) -> Result<()> {
        let line = self.layout.format(data);
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "text"
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

/// Terminal encoder
///
/// Error and Fatal events go to stderr, everything else (including payloads
/// without a level field) to stdout.
#[derive(Debug, Clone)]
pub struct ConsoleEncoder {
    layout: TextLayout,
}

impl ConsoleEncoder {
    pub fn new() -> Self {
        Self::with_colors(cfg!(feature = "console"))
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            layout: TextLayout {
                use_colors,
                ..TextLayout::default()
            },
        }
    }

    /// Read the level from `key` instead of `"level"`
    #[must_use]
    pub fn with_level_key(mut self, key: impl Into<String>) -> Self {
        self.layout.level_key = key.into();
        self
    }

    /// Render a payload exactly as `encode` would print it
    pub fn format(&self, data: &LogData) -> String {
        self.layout.format(data)
    }
}

impl Default for ConsoleEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for ConsoleEncoder {
    fn encode(&self, data: &LogData) -> Result<()> {
        let output = self.layout.format(data);

        // Route Error and Fatal levels to stderr, others to stdout
        match self.layout.level_of(data) {
            Some(LogLevel::Error | LogLevel::Fatal) => {
                writeln!(io::stderr().lock(), "{}", output)?;
            }
            _ => {
                writeln!(io::stdout().lock(), "{}", output)?;
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn flush(&self) -> Result<()> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_with_level() {
        let encoder = TextEncoder::new(Vec::new());
        let data = LogData::new()
            .with_field("level", "INFO")
            .with_field("user_id", 123)
            .with_field("action", "login");
        encoder.encode(&data).unwrap();

        let output = String::from_utf8(encoder.into_inner()).unwrap();
        assert_eq!(output, "[INFO ] action=login user_id=123\n");
    }

    #[test]
    fn test_text_level_only_has_no_trailing_space() {
        let encoder = TextEncoder::new(Vec::new());
        encoder.encode(&LogData::new().with_field("level", "INFO")).unwrap();

        let output = String::from_utf8(encoder.into_inner()).unwrap();
        assert_eq!(output, "[INFO ]\n");
        assert_eq!(
            ConsoleEncoder::with_colors(false).format(&LogData::new().with_field("level", "FATAL")),
            "[FATAL]"
        );
    }

    #[test]
    fn test_text_without_level() {
        let encoder = TextEncoder::new(Vec::new());
        encoder.encode(&LogData::new().with_field("msg", "x")).unwrap();

        assert_eq!(String::from_utf8(encoder.into_inner()).unwrap(), "msg=x\n");
    }

    #[test]
    fn test_text_custom_level_key() {
        let encoder = TextEncoder::new(Vec::new()).with_level_key("severity");
        let data = LogData::new()
            .with_field("severity", "error")
            .with_field("level", "not-a-level");
        encoder.encode(&data).unwrap();

        let output = String::from_utf8(encoder.into_inner()).unwrap();
        assert_eq!(output, "[ERROR] level=not-a-level\n");
    }

    #[test]
    fn test_console_format_without_colors() {
        let console = ConsoleEncoder::with_colors(false);
        let data = LogData::new()
            .with_field("level", "FATAL")
            .with_field("msg", "disk full");

        assert_eq!(console.format(&data), "[FATAL] msg=disk full");
    }

    #[test]
    fn test_console_encode_succeeds() {
        let console = ConsoleEncoder::with_colors(false);
        assert!(console.encode(&LogData::new().with_field("level", "ERROR")).is_ok());
        assert!(console.encode(&LogData::new()).is_ok());
    }
}
