//! Root logger defaults

use super::appender_registry::AppenderRegistry;
use crate::core::{parse_level, Appender, AtomicLevel, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Level and appender set applied to loggers that do not declare their own.
#[derive(Debug)]
pub struct RootConfig {
    level: AtomicLevel,
    level_name: String,
    appender_refs: BTreeSet<String>,
    appenders: BTreeMap<String, Arc<Appender>>,
}

impl RootConfig {
    /// Resolve the root level and every referenced appender.
    ///
    /// Duplicate references collapse. Any unresolved reference fails the
    /// whole build. An empty reference list is accepted; loggers that
    /// inherit it are rejected later, and implicit loggers write nowhere.
    pub fn build(
        level_name: &str,
        appender_refs: &[String],
        appenders: &AppenderRegistry,
    ) -> Result<Self> {
        let level = parse_level(level_name)?;
        let appender_refs: BTreeSet<String> = appender_refs.iter().cloned().collect();

        let resolved = appender_refs
            .iter()
            .map(|name| Ok((name.clone(), appenders.lookup(name)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self {
            level,
            level_name: level_name.to_string(),
            appender_refs,
            appenders: resolved,
        })
    }

    /// Gate shared by every implicitly created logger
    pub fn level(&self) -> &AtomicLevel {
        &self.level
    }

    /// Level text as configured, used as the fallback for declared loggers
    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    pub fn appender_refs(&self) -> &BTreeSet<String> {
        &self.appender_refs
    }

    pub fn appenders(&self) -> impl Iterator<Item = &Arc<Appender>> {
        self.appenders.values()
    }
}
