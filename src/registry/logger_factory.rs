//! Builds logger handles from declarations and root defaults

use super::{appender_registry::AppenderRegistry, root::RootConfig};
use crate::config::LoggerConfig;
use crate::core::{parse_level, Appender, AtomicLevel, IoCore, LogCore, Logger, LoggerError, Result, Tee};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Build a declared logger.
///
/// An empty level falls back to the root level name and an empty reference
/// list falls back to the root references as a whole; individual entries are
/// never merged with the root's. The resolved level is parsed into a new gate
/// owned by this logger.
pub fn build_logger(
    decl: &LoggerConfig,
    root: &RootConfig,
    appenders: &AppenderRegistry,
) -> Result<Logger> {
    let level_name = if decl.level.is_empty() {
        root.level_name()
    } else {
        decl.level.as_str()
    };

    let appender_refs: BTreeSet<&str> = if decl.appender_refs.is_empty() {
        root.appender_refs().iter().map(String::as_str).collect()
    } else {
        decl.appender_refs.iter().map(String::as_str).collect()
    };

    let level = parse_level(level_name)?;

    let resolved = appender_refs
        .into_iter()
        .map(|name| Ok((name, appenders.lookup(name)?)))
        .collect::<Result<BTreeMap<_, _>>>()?;

    if resolved.is_empty() {
        return Err(LoggerError::no_appenders(decl.name.as_str()));
    }

    Ok(assemble(&decl.name, resolved.values(), level))
}

/// Build a logger for a name that was never declared.
///
/// Uses the root appenders and shares the root gate. Cannot fail: the root
/// configuration was fully resolved at startup.
pub fn build_implicit(name: &str, root: &RootConfig) -> Logger {
    assemble(name, root.appenders(), root.level().clone())
}

/// One gated core per appender, combined into a single fan-out core
fn assemble<'a>(
    name: &str,
    appenders: impl Iterator<Item = &'a Arc<Appender>>,
    level: AtomicLevel,
) -> Logger {
    let cores: Vec<Arc<dyn LogCore>> = appenders
        .map(|appender| {
            Arc::new(IoCore::new(Arc::clone(appender), level.clone())) as Arc<dyn LogCore>
        })
        .collect();

    Logger::new(name, Arc::new(Tee::new(cores)), level)
}
