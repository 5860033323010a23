//! Core logger types and traits

pub mod appender;
pub mod encoder;
pub mod error;
pub mod log_context;
pub mod log_core;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use appender::{Appender, Sink};
pub use encoder::{Encoder, FormatEncoder, OutputFormat};
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, LogContext};
pub use log_core::{IoCore, LogCore, Tee};
pub use log_entry::LogEntry;
pub use log_level::{parse_level, AtomicLevel, LogLevel};
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
