//! Integration tests for the logger registry
//!
//! These tests verify:
//! - Root fallback for level and appenders
//! - Fatal startup errors (missing appender, duplicate logger, bad level)
//! - Fan-out to several appenders with per-logger gating
//! - Identity-stable handles from get_logger
//! - File appenders built from configuration

use parking_lot::Mutex;
use rust_logger_registry::appenders::AppenderFactory;
use rust_logger_registry::config::{AppenderConfig, Config, LoggerConfig};
use rust_logger_registry::core::{Appender, FormatEncoder, OutputFormat, Result, Sink};
use rust_logger_registry::{LogContext, LogLevel, LoggerError, Registry};
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// Collects lines per appender name so tests can see where records went
#[derive(Default, Clone)]
struct Capture {
    lines: Arc<Mutex<HashMap<String, Vec<serde_json::Value>>>>,
}

impl Capture {
    fn lines(&self, appender: &str) -> Vec<serde_json::Value> {
        self.lines.lock().get(appender).cloned().unwrap_or_default()
    }

    fn messages(&self, appender: &str) -> Vec<String> {
        self.lines(appender)
            .iter()
            .map(|line| line["message"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    fn factory(&self) -> AppenderFactory {
        let capture = self.clone();
        let mut factory = AppenderFactory::default();
        factory.register("memory", move |config| {
            Ok(Appender::new(
                FormatEncoder::new(OutputFormat::Json),
                CaptureSink {
                    name: config.name()?,
                    capture: capture.clone(),
                },
            ))
        });
        factory
    }
}

struct CaptureSink {
    name: String,
    capture: Capture,
}

impl Sink for CaptureSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let value = serde_json::from_str(line)?;
        self.capture
            .lines
            .lock()
            .entry(self.name.clone())
            .or_default()
            .push(value);
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

fn memory_config(appenders: &[&str], root_level: &str, root_refs: &[&str]) -> Config {
    let mut config = Config::default();
    config.appenders.insert(
        "memory".to_string(),
        appenders.iter().map(|name| AppenderConfig::new(*name)).collect(),
    );
    config.loggers.root.level = root_level.to_string();
    config.loggers.root.appender_refs = root_refs.iter().map(|s| s.to_string()).collect();
    config
}

#[test]
fn test_declared_and_implicit_logger_levels() {
    let capture = Capture::default();
    let mut config = memory_config(&["A"], "info", &["A"]);
    config
        .loggers
        .logger
        .push(LoggerConfig::new("svc").with_level("debug").with_appender_ref("A"));

    let registry = Registry::with_factory(&config, &capture.factory()).unwrap();

    let svc = registry.get_logger("svc");
    let other = registry.get_logger("other");
    assert_eq!(svc.level().level(), LogLevel::Debug);
    assert_eq!(other.level().level(), LogLevel::Info);

    svc.debug("svc debug");
    other.debug("other debug");
    other.info("other info");

    let lines = capture.lines("A");
    assert_eq!(capture.messages("A"), vec!["svc debug", "other info"]);
    assert_eq!(lines[0]["logger"], "svc");
    assert_eq!(lines[1]["logger"], "other");
}

#[test]
fn test_missing_appender_reference_fails_startup() {
    let mut config = memory_config(&["A"], "info", &["A"]);
    config
        .loggers
        .logger
        .push(LoggerConfig::new("svc").with_appender_ref("B"));

    let err = Registry::with_factory(&config, &Capture::default().factory()).unwrap_err();
    assert!(matches!(err, LoggerError::AppenderNotFound { ref name } if name == "B"));
}

#[test]
fn test_missing_root_reference_fails_startup() {
    let config = memory_config(&["A"], "info", &["A", "ghost"]);

    let err = Registry::with_factory(&config, &Capture::default().factory()).unwrap_err();
    assert!(matches!(err, LoggerError::AppenderNotFound { ref name } if name == "ghost"));
}

#[test]
fn test_duplicate_logger_fails_startup() {
    let mut config = memory_config(&["A"], "info", &["A"]);
    config.loggers.logger.push(LoggerConfig::new("svc"));
    config.loggers.logger.push(LoggerConfig::new("svc"));

    let err = Registry::with_factory(&config, &Capture::default().factory()).unwrap_err();
    assert!(matches!(err, LoggerError::DuplicateLogger { ref name } if name == "svc"));
}

#[test]
fn test_duplicate_appender_fails_startup() {
    let config = memory_config(&["A", "A"], "info", &["A"]);

    let err = Registry::with_factory(&config, &Capture::default().factory()).unwrap_err();
    assert!(matches!(err, LoggerError::DuplicateAppender { ref name } if name == "A"));
}

#[test]
fn test_empty_appender_name_fails_startup() {
    let config = memory_config(&[""], "info", &[]);

    let err = Registry::with_factory(&config, &Capture::default().factory()).unwrap_err();
    assert!(matches!(err, LoggerError::EmptyAppenderName));
}

#[test]
fn test_declared_logger_without_any_appender_fails_startup() {
    let mut config = memory_config(&["A"], "info", &[]);
    config.loggers.logger.push(LoggerConfig::new("svc"));

    let err = Registry::with_factory(&config, &Capture::default().factory()).unwrap_err();
    assert!(matches!(err, LoggerError::NoAppenders { .. }));
}

#[test]
fn test_empty_refs_inherit_root_set() {
    let capture = Capture::default();
    let mut config = memory_config(&["A", "B", "C"], "info", &["A", "B"]);
    config.loggers.logger.push(LoggerConfig::new("inherits").with_level("warn"));
    config
        .loggers
        .logger
        .push(LoggerConfig::new("overrides").with_appender_ref("C"));

    let registry = Registry::with_factory(&config, &capture.factory()).unwrap();

    registry.get_logger("inherits").warn("to root set");
    registry.get_logger("inherits").info("below warn");
    registry.get_logger("overrides").info("only C");

    assert_eq!(capture.messages("A"), vec!["to root set"]);
    assert_eq!(capture.messages("B"), vec!["to root set"]);
    assert_eq!(capture.messages("C"), vec!["only C"]);
}

#[test]
fn test_duplicate_refs_deliver_once() {
    let capture = Capture::default();
    let mut config = memory_config(&["A"], "info", &["A", "A"]);
    config.loggers.logger.push(
        LoggerConfig::new("svc")
            .with_appender_ref("A")
            .with_appender_ref("A"),
    );

    let registry = Registry::with_factory(&config, &capture.factory()).unwrap();
    registry.get_logger("svc").info("declared");
    registry.get_logger("implicit").info("implicit");

    assert_eq!(capture.messages("A"), vec!["declared", "implicit"]);
}

#[test]
fn test_get_logger_is_identity_stable() {
    let registry =
        Registry::with_factory(&memory_config(&["A"], "info", &["A"]), &Capture::default().factory())
            .unwrap();

    let first = registry.get_logger("x");
    for _ in 0..10 {
        assert!(Arc::ptr_eq(&first, &registry.get_logger("x")));
    }
    assert!(!Arc::ptr_eq(&first, &registry.get_logger("y")));
}

#[test]
fn test_root_level_adjustment_reaches_implicit_loggers() {
    let capture = Capture::default();
    let registry =
        Registry::with_factory(&memory_config(&["A"], "info", &["A"]), &capture.factory()).unwrap();

    let logger = registry.get_logger("adjustable");
    logger.debug("dropped");
    registry.root().level().set_level(LogLevel::Debug);
    logger.debug("kept");

    assert_eq!(capture.messages("A"), vec!["kept"]);
}

#[test]
fn test_structured_fields_reach_appender() {
    let capture = Capture::default();
    let registry =
        Registry::with_factory(&memory_config(&["A"], "info", &["A"]), &capture.factory()).unwrap();

    let logger = registry
        .get_logger("http")
        .with_context(LogContext::new().with_field("service", "api"));
    logger.info_with_context("request done", LogContext::new().with_field("status", 200));

    let lines = capture.lines("A");
    assert_eq!(lines[0]["service"], "api");
    assert_eq!(lines[0]["status"], 200);
}

#[test]
fn test_log_injection_prevention() {
    let capture = Capture::default();
    let registry =
        Registry::with_factory(&memory_config(&["A"], "info", &["A"]), &capture.factory()).unwrap();

    registry
        .get_logger("auth")
        .info("User login\nERROR [2024-10-17] Fake error injected");

    let messages = capture.messages("A");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("\\n"));
}

#[test]
fn test_file_appender_from_json_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let app_log = temp_dir.path().join("app.log");
    let audit_log = temp_dir.path().join("audit.jsonl");

    let raw = serde_json::json!({
        "appenders": {
            "file": [
                { "name": "app", "path": app_log },
                { "name": "audit", "path": audit_log, "format": "json" }
            ]
        },
        "loggers": {
            "root": { "level": "info", "appender_refs": ["app"] },
            "logger": [
                { "name": "audit", "appender_refs": ["app", "audit"] }
            ]
        }
    });

    let registry = Registry::new(&Config::from_value(raw).unwrap()).unwrap();
    registry.get_logger("audit").warn("user deleted");
    registry.get_logger("web").info("page served");
    registry.get_logger("web").debug("not written");
    registry.flush().expect("Failed to flush");

    let app = fs::read_to_string(&app_log).expect("Failed to read app log");
    let lines: Vec<&str> = app.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("audit - user deleted"));
    assert!(lines[1].contains("web - page served"));

    let audit = fs::read_to_string(&audit_log).expect("Failed to read audit log");
    let parsed: serde_json::Value = serde_json::from_str(audit.trim_end()).unwrap();
    assert_eq!(parsed["level"], "WARN");
    assert_eq!(parsed["logger"], "audit");
}

#[test]
fn test_config_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("logging.json");
    fs::write(
        &config_path,
        r#"{
            "appenders": { "console": [ { "name": "stdout", "target": "stdout" } ] },
            "loggers": { "root": { "level": "warn", "appender_refs": ["stdout"] } }
        }"#,
    )
    .unwrap();

    let registry = Registry::new(&Config::from_file(&config_path).unwrap()).unwrap();
    assert_eq!(registry.get_logger("any").level().level(), LogLevel::Warn);
}

#[test]
fn test_malformed_config_is_rejected() {
    let err = Registry::from_json_str(r#"{"loggers": {"logger": "not-a-list"}}"#).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
fn test_macros_format_only_when_enabled() {
    use rust_logger_registry::{debug, info};

    let capture = Capture::default();
    let registry =
        Registry::with_factory(&memory_config(&["A"], "info", &["A"]), &capture.factory()).unwrap();
    let logger = registry.get_logger("macros");

    info!(logger, "answer is {}", 42);
    debug!(logger, "hidden {}", 1);

    assert_eq!(capture.messages("A"), vec!["answer is 42"]);
    assert_eq!(logger.metrics().filtered_count(), 1);
}

#[test]
fn test_macros_count_filtered_like_methods() {
    use rust_logger_registry::debug;

    let capture = Capture::default();
    let registry =
        Registry::with_factory(&memory_config(&["A"], "info", &["A"]), &capture.factory()).unwrap();
    let logger = registry.get_logger("filtered");

    logger.debug("method");
    debug!(logger, "macro {}", 2);

    assert_eq!(logger.metrics().filtered_count(), 2);
    assert!(capture.messages("A").is_empty());
}

#[test]
fn test_macros_evaluate_logger_once() {
    use rust_logger_registry::{debug, info};
    use std::cell::Cell;

    let capture = Capture::default();
    let registry =
        Registry::with_factory(&memory_config(&["A"], "info", &["A"]), &capture.factory()).unwrap();
    let calls = Cell::new(0);
    let lookup = || {
        calls.set(calls.get() + 1);
        registry.get_logger("once")
    };

    info!(lookup(), "value {}", 1);
    assert_eq!(calls.get(), 1);

    debug!(lookup(), "value {}", 2);
    assert_eq!(calls.get(), 2);

    assert_eq!(capture.messages("A"), vec!["value 1"]);
}
