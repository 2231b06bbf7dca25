//! Logger metrics for observability
//!
//! Counters describing what happened to each `log` call. They are purely
//! observational and never change how an event is processed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_log_facade::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_encoded();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.encoded_count(), 1);
/// assert_eq!(metrics.filtered_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Payloads accepted by the encoder
    encoded: AtomicU64,

    /// Events dropped by the filter chain
    filtered: AtomicU64,

    /// Payloads the encoder failed on
    failed: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            encoded: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn encoded_count(&self) -> u64 {
        self.encoded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Total number of `log` calls observed
    pub fn total_count(&self) -> u64 {
        self.encoded_count() + self.filtered_count() + self.failed_count()
    }

    /// Record a successfully encoded payload, returning the previous count
    #[inline]
    pub fn record_encoded(&self) -> u64 {
        self.encoded.fetch_add(1, Ordering::Relaxed)
    }

    /// Record an event dropped by a filter, returning the previous count
    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    /// Record an encoder failure, returning the previous count
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    /// Encoder failure rate as a percentage (0.0 - 100.0)
    ///
    /// Only events that reached the encoder count. Returns 0.0 if none did.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_count() as f64;
        let total = self.encoded_count() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.encoded.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            encoded: AtomicU64::new(self.encoded_count()),
            filtered: AtomicU64::new(self.filtered_count()),
            failed: AtomicU64::new(self.failed_count()),
        }
    }
}
