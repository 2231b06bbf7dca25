//! Encoder trait for serializing and emitting payloads

use super::{error::Result, log_data::LogData};

/// Sink capability that accepts one payload and reports success or failure
///
/// The logger never inspects what an encoder does with the payload.
/// Buffering, flushing and thread safety of the underlying sink are the
/// encoder's own business; `encode` takes `&self` so implementations guard
/// shared state themselves.
pub trait Encoder: Send + Sync {
    fn encode(&self, data: &LogData) -> Result<()>;

    fn name(&self) -> &str;

    /// Push anything buffered to the underlying sink
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

impl<E: Encoder + ?Sized> Encoder for Box<E> {
    fn encode(&self, data: &LogData) -> Result<()> {
        (**self).encode(data)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

impl<E: Encoder + ?Sized> Encoder for std::sync::Arc<E> {
    fn encode(&self, data: &LogData) -> Result<()> {
        (**self).encode(data)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}
