//! Channel encoder for handing payloads to another thread
//!
//! The logger stays synchronous; whatever drains the receiver owns
//! buffering and delivery.

use crate::core::{Encoder, LogData, LoggerError, Result};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};

/// Forwards a copy of each payload on a `crossbeam-channel`
///
/// A bounded channel never blocks the caller: when it is full the payload is
/// refused with [`LoggerError::QueueFull`] and the logger reports it.
///
/// # Example
///
/// ```
/// use rust_log_facade::prelude::*;
///
/// let (encoder, receiver) = ChannelEncoder::bounded(16);
/// let logger = Logger::new(LogLevel::Info, encoder);
///
/// logger.info(LogData::new().with_field("msg", "queued"));
/// assert_eq!(receiver.try_recv().unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ChannelEncoder {
    sender: Sender<LogData>,
}

impl ChannelEncoder {
    /// Create an encoder backed by a channel holding at most `capacity` payloads
    pub fn bounded(capacity: usize) -> (Self, Receiver<LogData>) {
        let (sender, receiver) = bounded(capacity);
        (Self { sender }, receiver)
    }

    /// Create an encoder backed by an unbounded channel
    pub fn unbounded() -> (Self, Receiver<LogData>) {
        let (sender, receiver) = unbounded();
        (Self { sender }, receiver)
    }

    /// Number of payloads waiting in the channel
    pub fn len(&self) -> usize {
        self.sender.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sender.is_empty()
    }
}

impl Encoder for ChannelEncoder {
    fn encode(&self, data: &LogData) -> Result<()> {
        match self.sender.try_send(data.clone()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(LoggerError::queue_full(
                self.sender.len(),
                self.sender.capacity().unwrap_or(usize::MAX),
            )),
            Err(TrySendError::Disconnected(_)) => Err(LoggerError::ChannelSendError),
        }
    }

    fn name(&self) -> &str {
        "channel"
    }
}
