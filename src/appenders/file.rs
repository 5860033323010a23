//! File appender implementation

use crate::config::AppenderConfig;
use crate::core::{Appender, FormatEncoder, LoggerError, OutputFormat, Result, Sink, TimestampFormat};
use parking_lot::Mutex;
use serde::Deserialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Options of a `file` appender block
#[derive(Debug, Clone, Deserialize)]
pub struct FileOptions {
    pub path: PathBuf,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub timestamp_format: TimestampFormat,
}

/// Appends lines to a file through a buffered writer
pub struct FileSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.writer.get_mut().flush();
    }
}

/// Build a file appender from its configuration block
pub fn build(config: &AppenderConfig) -> Result<Appender> {
    let options: FileOptions = config.unpack()?;
    let encoder =
        FormatEncoder::new(options.format).with_timestamp_format(options.timestamp_format);

    Ok(Appender::new(encoder, FileSink::open(options.path)?))
}
