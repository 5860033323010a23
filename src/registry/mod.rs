//! Logger registry: builds every configured logger once and serves handles by name
//!
//! # Example
//!
//! ```
//! use rust_logger_registry::{LogLevel, Registry};
//! use std::sync::Arc;
//!
//! let registry = Registry::from_json_str(r#"{
//!     "appenders": { "console": [ { "name": "A" } ] },
//!     "loggers": {
//!         "root": { "level": "info", "appender_refs": ["A"] },
//!         "logger": [ { "name": "svc", "level": "debug" } ]
//!     }
//! }"#).unwrap();
//!
//! let svc = registry.get_logger("svc");
//! assert!(svc.enabled(LogLevel::Debug));
//!
//! let other = registry.get_logger("other");
//! assert!(!other.enabled(LogLevel::Debug));
//! assert!(Arc::ptr_eq(&other, &registry.get_logger("other")));
//! ```

pub mod appender_registry;
pub mod logger_factory;
pub mod root;

pub use appender_registry::AppenderRegistry;
pub use root::RootConfig;

use crate::appenders::AppenderFactory;
use crate::config::Config;
use crate::core::{Appender, Logger, LoggerError, Result};
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub struct Registry {
    appenders: AppenderRegistry,
    root: RootConfig,
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl Registry {
    /// Build a registry using the built-in appender types
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_factory(config, &AppenderFactory::default())
    }

    /// Build a registry, constructing appenders through `factory`.
    ///
    /// Appenders are built first, then the root configuration, then every
    /// declared logger in order. The first error aborts construction.
    pub fn with_factory(config: &Config, factory: &AppenderFactory) -> Result<Self> {
        let appenders = AppenderRegistry::from_config(&config.appenders, factory)?;

        let root_config = &config.loggers.root;
        let root = RootConfig::build(&root_config.level, &root_config.appender_refs, &appenders)?;

        let mut loggers = HashMap::with_capacity(config.loggers.logger.len());
        for decl in &config.loggers.logger {
            let logger = logger_factory::build_logger(decl, &root, &appenders)?;
            match loggers.entry(decl.name.clone()) {
                Entry::Occupied(_) => return Err(LoggerError::duplicate_logger(decl.name.as_str())),
                Entry::Vacant(slot) => {
                    slot.insert(Arc::new(logger));
                }
            }
        }

        Ok(Self {
            appenders,
            root,
            loggers: RwLock::new(loggers),
        })
    }

    /// Decode a JSON configuration and build a registry from it
    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::new(&Config::from_json_str(s)?)
    }

    /// Handle for `name`, creating it from the root configuration on first use.
    ///
    /// Always returns the same `Arc` for the same name. When several threads
    /// race on an unknown name each builds a candidate without holding the
    /// lock, and only the first one to publish is kept.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }

        let candidate = Arc::new(logger_factory::build_implicit(name, &self.root));

        let mut loggers = self.loggers.write();
        Arc::clone(loggers.entry(name.to_string()).or_insert(candidate))
    }

    pub fn contains_logger(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    /// Names of every logger built so far, sorted
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn root(&self) -> &RootConfig {
        &self.root
    }

    pub fn appender(&self, name: &str) -> Result<Arc<Appender>> {
        self.appenders.lookup(name)
    }

    pub fn appender_names(&self) -> Vec<&str> {
        self.appenders.names().collect()
    }

    /// Flush every registered appender once.
    ///
    /// All appenders are attempted; the first error is returned.
    pub fn flush(&self) -> Result<()> {
        let mut first_error: Option<LoggerError> = None;

        for (_, appender) in self.appenders.iter() {
            if let Err(e) = appender.sink().flush() {
                first_error.get_or_insert(e);
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("appenders", &self.appender_names())
            .field("root_level", &self.root.level().level())
            .field("loggers", &self.logger_names())
            .finish()
    }
}
