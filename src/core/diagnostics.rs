//! Side channel for reporting encoder failures
//!
//! `Logger::log` never propagates an encoder error. It formats the failure
//! and hands it to a [`DiagnosticSink`] instead.

use parking_lot::Mutex;

/// Receives one formatted message per failed log call
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, message: &str) {
        self(message)
    }
}

/// Writes diagnostics to the process error stream (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl DiagnosticSink for StderrDiagnostics {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Keeps diagnostics in memory
///
/// # Example
///
/// ```
/// use rust_log_facade::{DiagnosticSink, MemoryDiagnostics};
///
/// let sink = MemoryDiagnostics::new();
/// sink.report("[LOGGER ERROR] boom");
/// assert_eq!(sink.messages(), vec!["[LOGGER ERROR] boom".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all reported messages, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    pub fn clear(&self) {
        self.messages.lock().clear();
    }
}

impl DiagnosticSink for MemoryDiagnostics {
    fn report(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
