//! Named logger handles

use super::{
    error::Result,
    log_context::LogContext,
    log_core::LogCore,
    log_entry::LogEntry,
    log_level::{AtomicLevel, LogLevel},
    metrics::LoggerMetrics,
};
use std::fmt;
use std::sync::Arc;

/// Failures are reported on the first occurrence and then every this many
const FAILURE_REPORT_INTERVAL: u64 = 1000;

/// Named entry point for emitting records.
///
/// A handle wraps one (usually fan-out) core gated by one level. It is
/// immutable and can be shared freely between threads; the registry hands
/// out `Arc<Logger>`.
pub struct Logger {
    name: String,
    core: Arc<dyn LogCore>,
    level: AtomicLevel,
    context: LogContext,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    pub fn new(name: impl Into<String>, core: Arc<dyn LogCore>, level: AtomicLevel) -> Self {
        Self {
            name: name.into(),
            core,
            level,
            context: LogContext::new(),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The gate every appender of this logger was built with.
    ///
    /// Loggers created implicitly from the root configuration share the
    /// root's gate, so adjusting it affects all of them.
    pub fn level(&self) -> &AtomicLevel {
        &self.level
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Whether a record at `level` would reach at least one appender
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.core.enabled(level)
    }

    /// Child logger named `<parent>.<child>` writing to the same appenders
    #[must_use]
    pub fn named(&self, child: &str) -> Logger {
        let name = match (self.name.is_empty(), child.is_empty()) {
            (_, true) => self.name.clone(),
            (true, false) => child.to_string(),
            (false, false) => format!("{}.{}", self.name, child),
        };

        Logger {
            name,
            core: Arc::clone(&self.core),
            level: self.level.clone(),
            context: self.context.clone(),
            metrics: Arc::clone(&self.metrics),
        }
    }

    /// Child logger that adds `context` to every record it emits.
    ///
    /// Fields passed to [`log_with_context`](Logger::log_with_context) win
    /// over the persistent ones on key collisions.
    #[must_use]
    pub fn with_context(&self, context: LogContext) -> Logger {
        let mut merged = context;
        merged.merge_defaults(&self.context);

        Logger {
            name: self.name.clone(),
            core: Arc::clone(&self.core),
            level: self.level.clone(),
            context: merged,
            metrics: Arc::clone(&self.metrics),
        }
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.log_with_context(level, message, LogContext::new());
    }

    pub fn log_with_context(&self, level: LogLevel, message: impl AsRef<str>, context: LogContext) {
        if !self.core.enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        self.write_entry(level, message.as_ref(), context);
    }

    /// Log pre-captured format arguments, rendering them only when `level`
    /// is enabled. Used by the formatting macros.
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.core.enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        self.write_entry(level, &args.to_string(), LogContext::new());
    }

    fn write_entry(&self, level: LogLevel, message: &str, context: LogContext) {
        let mut context = context;
        context.merge_defaults(&self.context);
        let entry = LogEntry::new(level, self.name.as_str(), message).with_context(context);

        match self.core.write(&entry) {
            Ok(()) => self.metrics.record_logged(),
            Err(e) => {
                let previous = self.metrics.record_failed();
                if previous % FAILURE_REPORT_INTERVAL == 0 {
                    eprintln!(
                        "[LOGGER ERROR] Logger '{}' failed to write ({} failures so far): {}",
                        self.name,
                        previous + 1,
                        e
                    );
                }
            }
        }
    }

    #[inline]
    pub fn trace(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Fatal, message);
    }

    pub fn info_with_context(&self, message: impl AsRef<str>, context: LogContext) {
        self.log_with_context(LogLevel::Info, message, context);
    }

    pub fn error_with_context(&self, message: impl AsRef<str>, context: LogContext) {
        self.log_with_context(LogLevel::Error, message, context);
    }

    /// Flush every appender this logger writes to
    pub fn flush(&self) -> Result<()> {
        self.core.flush()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level.level())
            .finish_non_exhaustive()
    }
}
