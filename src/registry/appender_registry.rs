//! Name to appender mapping, populated once at startup

use crate::appenders::AppenderFactory;
use crate::config::AppenderConfig;
use crate::core::{Appender, LoggerError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct AppenderRegistry {
    appenders: BTreeMap<String, Arc<Appender>>,
}

impl AppenderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every configured appender and register it under its own name.
    ///
    /// Types are visited in tag order, instances in declaration order. The
    /// first failure aborts the whole build.
    pub fn from_config(
        groups: &BTreeMap<String, Vec<AppenderConfig>>,
        factory: &AppenderFactory,
    ) -> Result<Self> {
        let mut registry = Self::new();

        for (kind, configs) in groups {
            for config in configs {
                let appender = factory.create(kind, config)?;
                let name = config.name()?;
                registry.register(name, Arc::new(appender))?;
            }
        }

        Ok(registry)
    }

    /// Insert an appender. The registry is left untouched on error.
    pub fn register(&mut self, name: impl Into<String>, appender: Arc<Appender>) -> Result<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(LoggerError::EmptyAppenderName);
        }
        if self.appenders.contains_key(&name) {
            return Err(LoggerError::duplicate_appender(name));
        }
        self.appenders.insert(name, appender);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<Arc<Appender>> {
        self.appenders
            .get(name)
            .cloned()
            .ok_or_else(|| LoggerError::appender_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.appenders.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.appenders.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Appender>)> {
        self.appenders.iter().map(|(name, a)| (name.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.appenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appenders.is_empty()
    }
}
