//! Console appender implementation

use crate::config::AppenderConfig;
use crate::core::{Appender, FormatEncoder, OutputFormat, Result, Sink, TimestampFormat};
use serde::Deserialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Options of a `console` appender block
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConsoleOptions {
    pub target: ConsoleTarget,
    pub format: OutputFormat,
    pub timestamp_format: TimestampFormat,
    pub colors: bool,
}

pub struct ConsoleSink {
    target: ConsoleTarget,
}

impl ConsoleSink {
    pub fn new(target: ConsoleTarget) -> Self {
        Self { target }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleTarget::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleTarget::Stderr)
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, line: &str) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => writeln!(std::io::stdout().lock(), "{}", line)?,
            ConsoleTarget::Stderr => writeln!(std::io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush()?,
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }
}

/// Build a console appender from its configuration block
pub fn build(config: &AppenderConfig) -> Result<Appender> {
    let options: ConsoleOptions = config.unpack()?;
    let encoder = FormatEncoder::new(options.format)
        .with_timestamp_format(options.timestamp_format)
        .with_colors(options.colors);

    Ok(Appender::new(encoder, ConsoleSink::new(options.target)))
}
