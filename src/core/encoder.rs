//! Encoding strategies that turn a log entry into one output line
//!
//! Provides the [`Encoder`] trait used by every appender and a
//! [`FormatEncoder`] covering the built-in formats:
//! - Text: Human-readable format (default)
//! - Json: One JSON object per line
//! - Logfmt: Key-value format compatible with log aggregation tools

use super::error::Result;
use super::log_context::FieldValue;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Renders a [`LogEntry`] as a single line, without the trailing newline.
pub trait Encoder: Send + Sync {
    fn encode(&self, entry: &LogEntry) -> Result<String>;
}

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[2025-01-08T10:30:45.123Z] [INFO ] svc - Request processed`
    #[default]
    Text,

    /// `{"timestamp":"2025-01-08T10:30:45.123Z","level":"INFO","logger":"svc","message":"Request processed"}`
    Json,

    /// `timestamp=2025-01-08T10:30:45.123Z level=INFO logger=svc message="Request processed"`
    Logfmt,
}

/// Encoder for the built-in output formats
#[derive(Debug, Clone, Default)]
pub struct FormatEncoder {
    format: OutputFormat,
    timestamp_format: TimestampFormat,
    colors: bool,
}

impl FormatEncoder {
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Colorize the level column of text output. Ignored by the other formats
    /// and when the `console` feature is disabled.
    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    fn encode_text(&self, entry: &LogEntry) -> String {
        let timestamp_str = self.timestamp_format.format(&entry.timestamp);
        let base = format!(
            "[{}] [{}] {} - {}",
            timestamp_str,
            self.level_column(entry),
            entry.logger,
            entry.message
        );

        match entry.context {
            Some(ref context) if !context.is_empty() => {
                format!("{} {}", base, context.format_fields())
            }
            _ => base,
        }
    }

    #[cfg(feature = "console")]
    fn level_column(&self, entry: &LogEntry) -> String {
        use colored::Colorize;

        let padded = format!("{:5}", entry.level.to_str());
        if self.colors {
            padded.color(entry.level.color_code()).to_string()
        } else {
            padded
        }
    }

    #[cfg(not(feature = "console"))]
    fn level_column(&self, entry: &LogEntry) -> String {
        format!("{:5}", entry.level.to_str())
    }

    fn encode_json(&self, entry: &LogEntry) -> Result<String> {
        let mut json_obj = serde_json::Map::new();

        let timestamp: serde_json::Value = if self.timestamp_format.is_numeric() {
            match self.timestamp_format {
                TimestampFormat::Unix => entry.timestamp.timestamp().into(),
                _ => entry.timestamp.timestamp_millis().into(),
            }
        } else {
            serde_json::Value::String(self.timestamp_format.format(&entry.timestamp))
        };
        json_obj.insert("timestamp".to_string(), timestamp);
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );
        json_obj.insert(
            "logger".to_string(),
            serde_json::Value::String(entry.logger.clone()),
        );
        json_obj.insert(
            "message".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );

        if let Some(ref context) = entry.context {
            for (key, value) in context.fields() {
                json_obj.insert(key.clone(), value.to_json_value());
            }
        }

        Ok(serde_json::to_string(&serde_json::Value::Object(json_obj))?)
    }

    fn encode_logfmt(&self, entry: &LogEntry) -> String {
        let mut parts = vec![
            format!(
                "timestamp={}",
                escape_logfmt_value(&self.timestamp_format.format(&entry.timestamp))
            ),
            format!("level={}", entry.level.to_str()),
            format!("logger={}", escape_logfmt_value(&entry.logger)),
            // message is always quoted
            format!("message={}", quote_logfmt_value(&entry.message)),
        ];

        if let Some(ref context) = entry.context {
            for (key, value) in context.fields() {
                let formatted_value = match value {
                    FieldValue::String(s) => quote_logfmt_value(s),
                    other => other.to_string(),
                };
                parts.push(format!("{}={}", escape_logfmt_key(key), formatted_value));
            }
        }

        parts.join(" ")
    }
}

impl Encoder for FormatEncoder {
    fn encode(&self, entry: &LogEntry) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.encode_text(entry)),
            OutputFormat::Json => self.encode_json(entry),
            OutputFormat::Logfmt => Ok(self.encode_logfmt(entry)),
        }
    }
}

fn escape_logfmt_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == '.')
        .collect()
}

fn escape_logfmt_value(value: &str) -> String {
    if value.contains(' ') || value.contains('"') || value.contains('=') {
        quote_logfmt_value(value)
    } else {
        value.to_string()
    }
}

fn quote_logfmt_value(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogContext, LogLevel};

    #[test]
    fn test_text_format() {
        let entry = LogEntry::new(LogLevel::Info, "svc", "Test message");
        let result = FormatEncoder::new(OutputFormat::Text).encode(&entry).unwrap();

        assert!(result.contains("[INFO ]"));
        assert!(result.contains("svc - Test message"));
    }

    #[test]
    fn test_text_format_with_context() {
        let context = LogContext::new()
            .with_field("user_id", 123)
            .with_field("action", "login");
        let entry = LogEntry::new(LogLevel::Info, "auth", "User logged in").with_context(context);

        let result = FormatEncoder::default().encode(&entry).unwrap();
        assert!(result.ends_with("User logged in action=login user_id=123"));
    }

    #[test]
    fn test_json_format() {
        let context = LogContext::new().with_field("latency_ms", 42);
        let entry = LogEntry::new(LogLevel::Error, "db", "Error occurred").with_context(context);

        let result = FormatEncoder::new(OutputFormat::Json).encode(&entry).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed["level"], "ERROR");
        assert_eq!(parsed["logger"], "db");
        assert_eq!(parsed["message"], "Error occurred");
        assert_eq!(parsed["latency_ms"], 42);
        assert!(parsed["timestamp"].is_string());
    }

    #[test]
    fn test_json_numeric_timestamp() {
        let entry = LogEntry::new(LogLevel::Info, "svc", "tick");
        let result = FormatEncoder::new(OutputFormat::Json)
            .with_timestamp_format(TimestampFormat::UnixMillis)
            .encode(&entry)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert!(parsed["timestamp"].is_i64());
    }

    #[test]
    fn test_logfmt_format() {
        let context = LogContext::new().with_field("query", "SELECT * FROM users WHERE id=1");
        let entry = LogEntry::new(LogLevel::Warn, "svc", "Warning message").with_context(context);

        let result = FormatEncoder::new(OutputFormat::Logfmt).encode(&entry).unwrap();
        assert!(result.contains("level=WARN"));
        assert!(result.contains("logger=svc"));
        assert!(result.contains("message=\"Warning message\""));
        assert!(result.contains("query=\"SELECT * FROM users WHERE id=1\""));
    }

    #[test]
    fn test_output_format_from_config_text() {
        let format: OutputFormat = serde_json::from_str("\"logfmt\"").unwrap();
        assert_eq!(format, OutputFormat::Logfmt);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
