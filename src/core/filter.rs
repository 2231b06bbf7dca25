//! Filter trait and the ordered filter chain
//!
//! A filter receives the event level, the logger threshold and the current
//! payload. It returns `Some(payload)` to continue the chain, possibly with a
//! rewritten payload, or `None` to drop the event.

use super::{log_data::LogData, log_level::LogLevel};
use std::fmt;

/// A pure, stateless gate or transform applied before encoding
///
/// Any `Fn(LogLevel, LogLevel, LogData) -> Option<LogData>` that is
/// `Send + Sync` is a filter, so plain functions and closures can be pushed
/// onto a chain directly:
///
/// ```
/// use rust_log_facade::{Filter, LogData, LogLevel};
///
/// let add_host = |_: LogLevel, _: LogLevel, data: LogData| Some(data.with_field("host", "x"));
/// let out = add_host.apply(LogLevel::Info, LogLevel::Info, LogData::new());
/// assert!(out.unwrap().contains_key("host"));
/// ```
pub trait Filter: Send + Sync {
    fn apply(&self, level: LogLevel, threshold: LogLevel, data: LogData) -> Option<LogData>;

    fn name(&self) -> &str {
        "fn"
    }
}

impl<F> Filter for F
where
    F: Fn(LogLevel, LogLevel, LogData) -> Option<LogData> + Send + Sync,
{
    fn apply(&self, level: LogLevel, threshold: LogLevel, data: LogData) -> Option<LogData> {
        self(level, threshold, data)
    }
}

/// Ordered sequence of filters applied left to right
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn push(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    /// Run `data` through every filter in order
    ///
    /// The first filter returning `None` short-circuits the chain; later
    /// filters never see the event.
    pub fn apply(&self, level: LogLevel, threshold: LogLevel, data: LogData) -> Option<LogData> {
        self.filters
            .iter()
            .try_fold(data, |data, filter| filter.apply(level, threshold, data))
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Filter names in chain order
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

impl FromIterator<Box<dyn Filter>> for FilterChain {
    fn from_iter<I: IntoIterator<Item = Box<dyn Filter>>>(iter: I) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("filters", &self.names())
            .finish()
    }
}
