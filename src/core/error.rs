//! Error types for the logging facade
//!
//! `Logger::log` never returns these: encoder failures are reported on the
//! diagnostic side channel. They surface from encoders themselves and from
//! construction-time operations such as opening a log file or building a
//! logger from configuration.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Encoder could not represent the payload
    #[error("Encoding error ({encoder}): {message}")]
    Encoding { encoder: String, message: String },

    /// Channel encoder queue is full
    #[error("Log queue full: {current}/{max} messages buffered")]
    QueueFull { current: usize, max: usize },

    /// Channel encoder receiver has gone away
    #[error("Failed to send log payload: receiver disconnected")]
    ChannelSendError,

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Free-form failure for encoders written outside this crate
    ///
    /// The built-in encoders use the specific variants above.
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an encoding error
    pub fn encoding(encoder: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Encoding {
            encoder: encoder.into(),
            message: message.into(),
        }
    }

    /// Create a queue full error with buffer details
    pub fn queue_full(current: usize, max: usize) -> Self {
        LoggerError::QueueFull { current, max }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a free-form error, typically from a custom [`Encoder`](crate::Encoder)
    ///
    /// ```
    /// use rust_log_facade::{Encoder, LogData, LoggerError, Result};
    ///
    /// struct Remote;
    ///
    /// impl Encoder for Remote {
    ///     fn encode(&self, _data: &LogData) -> Result<()> {
    ///         Err(LoggerError::other("collector unreachable"))
    ///     }
    ///
    ///     fn name(&self) -> &str {
    ///         "remote"
    ///     }
    /// }
    ///
    /// assert_eq!(
    ///     Remote.encode(&LogData::new()).unwrap_err().to_string(),
    ///     "collector unreachable"
    /// );
    /// ```
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::queue_full(100, 1000);
        assert!(matches!(err, LoggerError::QueueFull { .. }));

        let err = LoggerError::config("LoggerConfig", "empty level key");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::encoding("json", "non-finite float");
        assert!(matches!(err, LoggerError::Encoding { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::queue_full(100, 1000);
        assert_eq!(
            err.to_string(),
            "Log queue full: 100/1000 messages buffered"
        );

        let err = LoggerError::encoding("json", "field 'ratio' is not finite");
        assert_eq!(
            err.to_string(),
            "Encoding error (json): field 'ratio' is not finite"
        );

        let err = LoggerError::config("Redact", "empty key");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for Redact: empty key"
        );

        let err = LoggerError::other("collector unreachable");
        assert!(matches!(err, LoggerError::Other(_)));
        assert_eq!(err.to_string(), "collector unreachable");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open /var/log/app.log", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
