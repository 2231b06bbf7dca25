//! Logging macros for building payloads inline.
//!
//! # Examples
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use rust_log_facade::{info, log_data};
//!
//! let logger = Logger::new(LogLevel::Info, ConsoleEncoder::with_colors(false));
//!
//! // Build a payload
//! let data = log_data! { "user_id" => 42, "action" => "login" };
//! assert_eq!(data.len(), 2);
//!
//! // Log key-value pairs directly
//! let port = 8080;
//! info!(logger, "msg" => "server started", "port" => port);
//! ```

/// Build a [`LogData`](crate::LogData) from `key => value` pairs.
///
/// ```
/// use rust_log_facade::log_data;
///
/// let empty = log_data! {};
/// assert!(empty.is_empty());
///
/// let data = log_data! { "a" => 1, "b" => "two", };
/// assert!(data.contains_key("b"));
/// ```
#[macro_export]
macro_rules! log_data {
    () => {
        $crate::LogData::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut data = $crate::LogData::new();
        $(
            data.insert($key, $value);
        )+
        data
    }};
}

/// Log `key => value` pairs at the given level.
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::new(LogLevel::Trace, ConsoleEncoder::with_colors(false));
/// use rust_log_facade::log;
/// log!(logger, LogLevel::Info, "msg" => "simple message");
/// log!(logger, LogLevel::Error, "code" => 500, "path" => "/api");
/// log!(logger, LogLevel::Trace);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.log($level, $crate::log_data!($($key => $value),*))
    };
}

/// Log a fatal-level event.
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::new(LogLevel::Info, ConsoleEncoder::with_colors(false));
/// use rust_log_facade::fatal;
/// fatal!(logger, "msg" => "cannot recover", "reason" => "corrupted state");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Fatal $(, $key => $value)*)
    };
}

/// Log an error-level event.
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::new(LogLevel::Info, ConsoleEncoder::with_colors(false));
/// use rust_log_facade::error;
/// error!(logger, "msg" => "request failed", "status" => 500);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $key => $value)*)
    };
}

/// Log an info-level event.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $key => $value)*)
    };
}

/// Log a trace-level event.
///
/// ```
/// # use rust_log_facade::prelude::*;
/// # let logger = Logger::new(LogLevel::Trace, ConsoleEncoder::with_colors(false));
/// use rust_log_facade::trace;
/// trace!(logger, "fn" => "calculate", "value" => 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Trace $(, $key => $value)*)
    };
}
