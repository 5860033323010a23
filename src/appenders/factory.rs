//! Appender construction by type tag

use crate::config::AppenderConfig;
use crate::core::{Appender, LoggerError, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Builds an appender from its configuration block
pub type AppenderConstructor = Arc<dyn Fn(&AppenderConfig) -> Result<Appender> + Send + Sync>;

/// Table mapping appender type tags to constructors.
///
/// [`AppenderFactory::default`] knows the built-in `console` and `file`
/// types. Additional types are plugged in with
/// [`register`](AppenderFactory::register) before the registry is built.
///
/// # Example
///
/// ```
/// use rust_logger_registry::appenders::{AppenderFactory, ConsoleSink};
/// use rust_logger_registry::core::{Appender, FormatEncoder};
///
/// let mut factory = AppenderFactory::default();
/// factory.register("stderr", |_config| {
///     Ok(Appender::new(FormatEncoder::default(), ConsoleSink::stderr()))
/// });
/// assert!(factory.contains("stderr"));
/// ```
#[derive(Clone)]
pub struct AppenderFactory {
    constructors: HashMap<String, AppenderConstructor>,
}

impl AppenderFactory {
    /// A factory with no types registered
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register or replace the constructor for `kind`
    pub fn register<F>(&mut self, kind: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn(&AppenderConfig) -> Result<Appender> + Send + Sync + 'static,
    {
        self.constructors.insert(kind.into(), Arc::new(constructor));
        self
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    pub fn create(&self, kind: &str, config: &AppenderConfig) -> Result<Appender> {
        let constructor = self
            .constructors
            .get(kind)
            .ok_or_else(|| LoggerError::UnknownAppenderType {
                kind: kind.to_string(),
            })?;
        constructor(config)
    }
}

impl Default for AppenderFactory {
    fn default() -> Self {
        let mut factory = Self::empty();
        factory
            .register("console", super::console::build)
            .register("file", super::file::build);
        factory
    }
}

impl fmt::Debug for AppenderFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.constructors.keys().collect();
        kinds.sort();
        f.debug_struct("AppenderFactory").field("kinds", &kinds).finish()
    }
}
