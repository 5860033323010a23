//! Composable logging cores
//!
//! An [`IoCore`] binds one appender to a level gate. A [`Tee`] fans a record
//! out to any number of cores, so a logger with several appenders is a tee
//! over one `IoCore` per appender.

use super::{
    appender::Appender,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::{AtomicLevel, LogLevel},
};
use std::sync::Arc;

pub trait LogCore: Send + Sync {
    fn enabled(&self, level: LogLevel) -> bool;

    /// Deliver a record. Callers check [`enabled`](LogCore::enabled) first;
    /// a core may still decline a record it does not accept.
    fn write(&self, entry: &LogEntry) -> Result<()>;

    fn flush(&self) -> Result<()>;
}

/// A single appender gated by a level
pub struct IoCore {
    level: AtomicLevel,
    appender: Arc<Appender>,
}

impl IoCore {
    pub fn new(appender: Arc<Appender>, level: AtomicLevel) -> Self {
        Self { level, appender }
    }

    pub fn level(&self) -> &AtomicLevel {
        &self.level
    }
}

impl LogCore for IoCore {
    #[inline]
    fn enabled(&self, level: LogLevel) -> bool {
        self.level.enabled(level)
    }

    fn write(&self, entry: &LogEntry) -> Result<()> {
        if !self.enabled(entry.level) {
            return Ok(());
        }
        let line = self.appender.encoder().encode(entry)?;
        self.appender.sink().write_line(&line)
    }

    fn flush(&self) -> Result<()> {
        self.appender.sink().flush()
    }
}

/// Fan-out over several cores.
///
/// Every child whose gate accepts the record receives it. A failing child
/// does not stop delivery to the remaining ones; the first error is returned
/// once all children were tried. A tee with no children drops everything.
#[derive(Default)]
pub struct Tee {
    cores: Vec<Arc<dyn LogCore>>,
}

impl Tee {
    pub fn new(cores: Vec<Arc<dyn LogCore>>) -> Self {
        Self { cores }
    }

    pub fn len(&self) -> usize {
        self.cores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }
}

impl LogCore for Tee {
    fn enabled(&self, level: LogLevel) -> bool {
        self.cores.iter().any(|core| core.enabled(level))
    }

    fn write(&self, entry: &LogEntry) -> Result<()> {
        let mut first_error: Option<LoggerError> = None;

        for core in self.cores.iter().filter(|core| core.enabled(entry.level)) {
            if let Err(e) = core.write(entry) {
                first_error.get_or_insert(e);
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    fn flush(&self) -> Result<()> {
        let mut first_error: Option<LoggerError> = None;

        for core in &self.cores {
            if let Err(e) = core.flush() {
                first_error.get_or_insert(e);
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}
