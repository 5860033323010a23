//! # Rust Logger Registry
//!
//! Builds ready-to-use loggers from a declarative configuration of
//! appenders, levels and named loggers.
//!
//! ## Features
//!
//! - **Named Appenders**: Console, file and custom appender types built through a factory
//! - **Root Inheritance**: Loggers without a level or appender list take the root's
//! - **Fan-out**: One record reaches every appender of its logger
//! - **Thread Safe**: Undeclared loggers are created lazily, exactly once per name

pub mod appenders;
pub mod config;
pub mod core;
pub mod macros;
pub mod registry;

pub mod prelude {
    pub use crate::appenders::{AppenderFactory, ConsoleSink, FileSink};
    pub use crate::config::{AppenderConfig, Config, LoggerConfig};
    pub use crate::core::{
        Appender, AtomicLevel, Encoder, FieldValue, FormatEncoder, LogContext, LogEntry, LogLevel,
        Logger, LoggerError, LoggerMetrics, OutputFormat, Result, Sink, TimestampFormat,
    };
    pub use crate::registry::Registry;
}

pub use appenders::AppenderFactory;
pub use config::Config;
pub use crate::core::{
    parse_level, Appender, AtomicLevel, Encoder, FieldValue, FormatEncoder, LogContext, LogEntry,
    LogLevel, Logger, LoggerError, LoggerMetrics, OutputFormat, Result, Sink, TimestampFormat,
};
pub use registry::Registry;
