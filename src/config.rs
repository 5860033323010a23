//! Typed logging configuration
//!
//! The registry consumes an already decoded [`Config`]. Decoding goes through
//! `serde`, so any serde format works; JSON helpers are provided:
//!
//! ```
//! use rust_logger_registry::config::Config;
//!
//! let config = Config::from_json_str(r#"{
//!     "appenders": { "console": [ { "name": "stdout" } ] },
//!     "loggers": {
//!         "root": { "level": "info", "appender_refs": ["stdout"] },
//!         "logger": [ { "name": "db", "level": "debug" } ]
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(config.loggers.logger[0].name, "db");
//! ```

use crate::core::{LoggerError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Appender type tag (e.g. `"console"`, `"file"`) to the instances of that type
    pub appenders: BTreeMap<String, Vec<AppenderConfig>>,
    pub loggers: LoggersConfig,
}

impl Config {
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| LoggerError::config("config", e.to_string()))
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| LoggerError::config("config", e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading logging config", path.display().to_string(), e)
        })?;
        Self::from_json_str(&raw)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggersConfig {
    pub root: RootLoggerConfig,
    /// Declared loggers, built in order at startup
    pub logger: Vec<LoggerConfig>,
}

/// Defaults applied to every logger that leaves level or appenders unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootLoggerConfig {
    pub level: String,
    pub appender_refs: Vec<String>,
}

impl Default for RootLoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            appender_refs: Vec::new(),
        }
    }
}

/// A declared logger.
///
/// An empty `level` inherits the root level. An empty `appender_refs` list
/// inherits the root appenders; a non-empty list replaces them entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub name: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub appender_refs: Vec<String>,
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn with_appender_ref(mut self, name: impl Into<String>) -> Self {
        self.appender_refs.push(name.into());
        self
    }
}

/// Configuration block of one appender instance.
///
/// The block is kept opaque; the constructor registered for the appender
/// type decodes its own options with [`unpack`](AppenderConfig::unpack).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppenderConfig {
    block: serde_json::Map<String, serde_json::Value>,
}

impl AppenderConfig {
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        Self::default().with_option("name", name)
    }

    #[must_use]
    pub fn with_option(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.block.insert(key.to_string(), value.into());
        self
    }

    /// Registry key of the appender
    pub fn name(&self) -> Result<String> {
        match self.block.get("name") {
            Some(serde_json::Value::String(name)) => Ok(name.clone()),
            Some(other) => Err(LoggerError::config(
                "appender",
                format!("name must be a string, got {}", other),
            )),
            None => Err(LoggerError::config("appender", "missing name")),
        }
    }

    /// Decode the block into a type-specific options struct
    pub fn unpack<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(serde_json::Value::Object(self.block.clone()))
            .map_err(|e| LoggerError::config("appender", e.to_string()))
    }
}
