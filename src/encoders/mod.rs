//! Encoder implementations

pub mod channel;
pub mod json;
pub mod logfmt;
pub mod text;

pub use channel::ChannelEncoder;
pub use json::JsonEncoder;
pub use logfmt::LogfmtEncoder;
pub use text::{ConsoleEncoder, TextEncoder};

// Re-export the trait for encoder authors
pub use crate::core::Encoder;

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::BufWriter;
use std::path::Path;

/// Open `path` for appending, creating it if needed
pub(crate) fn open_append(path: &Path) -> Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            LoggerError::io_operation("opening log file", path.display().to_string(), e)
        })?;
    Ok(BufWriter::new(file))
}
