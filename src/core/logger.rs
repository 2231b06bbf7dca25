//! Main logger implementation

use super::{
    diagnostics::{DiagnosticSink, StderrDiagnostics},
    encoder::Encoder,
    filter::{Filter, FilterChain},
    log_data::LogData,
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use crate::filters;
use std::fmt;
use std::sync::Arc;

/// Structured logger composed of a filter chain and a single encoder
///
/// Configuration is fixed at construction. `log` takes `&self`, holds no
/// locks, and performs at most one encoder call, so a logger can be shared
/// across threads behind an `Arc`.
pub struct Logger {
    threshold: LogLevel,
    filters: FilterChain,
    encoder: Box<dyn Encoder>,
    diagnostics: Arc<dyn DiagnosticSink>,
    /// Metrics for observability (encoded, filtered, failed)
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger whose only filter is [`filters::threshold`]
    ///
    /// Encoder failures are reported on stderr.
    #[must_use]
    pub fn new<E: Encoder + 'static>(threshold: LogLevel, encoder: E) -> Self {
        Logger::builder(encoder)
            .threshold(threshold)
            .threshold_filter()
            .build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_log_facade::prelude::*;
    ///
    /// let logger = Logger::builder(JsonEncoder::stdout())
    ///     .threshold(LogLevel::Error)
    ///     .threshold_filter()
    ///     .filter(Redact::new(["password"]))
    ///     .build();
    /// assert_eq!(logger.filters().len(), 2);
    /// ```
    #[must_use]
    pub fn builder<E: Encoder + 'static>(encoder: E) -> LoggerBuilder {
        LoggerBuilder::new(encoder)
    }

    /// Run `data` through the filter chain and encode what survives
    ///
    /// Never fails and never panics on encoder errors: a failure is reported
    /// once on the diagnostic sink and the call returns normally.
    pub fn log(&self, level: LogLevel, data: LogData) {
        let Some(data) = self.filters.apply(level, self.threshold, data) else {
            self.metrics.record_filtered();
            return;
        };

        match self.encoder.encode(&data) {
            Ok(()) => {
                self.metrics.record_encoded();
            }
            Err(e) => {
                self.metrics.record_failed();
                self.diagnostics.report(&format!(
                    "[LOGGER ERROR] Encoder '{}' failed: {}",
                    self.encoder.name(),
                    e
                ));
            }
        }
    }

    /// Flush the encoder, reporting a failure on the diagnostic sink
    pub fn flush(&self) {
        if let Err(e) = self.encoder.flush() {
            self.diagnostics.report(&format!(
                "[LOGGER ERROR] Encoder '{}' flush failed: {}",
                self.encoder.name(),
                e
            ));
        }
    }

    pub fn fatal(&self, data: LogData) {
        self.log(LogLevel::Fatal, data);
    }

    pub fn error(&self, data: LogData) {
        self.log(LogLevel::Error, data);
    }

    pub fn info(&self, data: LogData) {
        self.log(LogLevel::Info, data);
    }

    pub fn trace(&self, data: LogData) {
        self.log(LogLevel::Trace, data);
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    pub fn filters(&self) -> &FilterChain {
        &self.filters
    }

    pub fn encoder_name(&self) -> &str {
        self.encoder.name()
    }

    /// Get logger metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("filters", &self.filters)
            .field("encoder", &self.encoder.name())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Filters run in the order they are added. The threshold is only consulted
/// by filters that read it, so a builder without
/// [`threshold_filter`](LoggerBuilder::threshold_filter) lets every level
/// through.
pub struct LoggerBuilder {
    threshold: LogLevel,
    filters: FilterChain,
    encoder: Box<dyn Encoder>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl LoggerBuilder {
    /// Create a new builder around `encoder` with default values
    pub fn new<E: Encoder + 'static>(encoder: E) -> Self {
        Self {
            threshold: LogLevel::default(),
            filters: FilterChain::new(),
            encoder: Box::new(encoder),
            diagnostics: Arc::new(StderrDiagnostics),
        }
    }

    /// Set the threshold passed to every filter
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: LogLevel) -> Self {
        self.threshold = level;
        self
    }

    /// Append a filter to the chain
    #[must_use = "builder methods return a new value"]
    pub fn filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Append an already boxed filter to the chain
    #[must_use = "builder methods return a new value"]
    pub fn boxed_filter(mut self, filter: Box<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Append the built-in threshold filter at the current position
    #[must_use = "builder methods return a new value"]
    pub fn threshold_filter(self) -> Self {
        self.filter(filters::Threshold)
    }

    /// Set where encoder failures are reported
    ///
    /// # Example
    ///
    /// ```
    /// use rust_log_facade::prelude::*;
    /// use std::sync::Arc;
    ///
    /// let diagnostics = Arc::new(MemoryDiagnostics::new());
    /// let logger = Logger::builder(JsonEncoder::stdout())
    ///     .diagnostics(diagnostics.clone())
    ///     .build();
    /// ```
    #[must_use = "builder methods return a new value"]
    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            threshold: self.threshold,
            filters: self.filters,
            encoder: self.encoder,
            diagnostics: self.diagnostics,
            metrics: LoggerMetrics::new(),
        }
    }
}
