//! Appenders: an output sink bound to an encoding strategy

use super::{encoder::Encoder, error::Result};
use std::fmt;
use std::sync::Arc;

/// Output destination for encoded log lines.
///
/// Sinks are shared between every logger that references the owning
/// appender, so implementations synchronize internally.
pub trait Sink: Send + Sync {
    /// Write one encoded line. `line` carries no trailing newline.
    fn write_line(&self, line: &str) -> Result<()>;
    fn flush(&self) -> Result<()>;
}

/// A named output destination as registered in the appender registry.
///
/// Immutable once built; loggers hold it through an `Arc`.
#[derive(Clone)]
pub struct Appender {
    encoder: Arc<dyn Encoder>,
    sink: Arc<dyn Sink>,
}

impl Appender {
    pub fn new<E, S>(encoder: E, sink: S) -> Self
    where
        E: Encoder + 'static,
        S: Sink + 'static,
    {
        Self {
            encoder: Arc::new(encoder),
            sink: Arc::new(sink),
        }
    }

    pub fn encoder(&self) -> &Arc<dyn Encoder> {
        &self.encoder
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }
}

impl fmt::Debug for Appender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Appender").finish_non_exhaustive()
    }
}
