//! Error types for the logger registry

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Level text did not match any known severity
    #[error("Invalid log level: '{level}'")]
    InvalidLevel { level: String },

    /// Appender registered under an empty name
    #[error("Appender name should not be empty")]
    EmptyAppenderName,

    /// Two appenders share the same registry key
    #[error("Duplicated appender name '{name}'")]
    DuplicateAppender { name: String },

    /// A logger references an appender that was never registered
    #[error("Appender '{name}' not found")]
    AppenderNotFound { name: String },

    /// A logger resolved to zero output destinations
    #[error("Logger '{logger}' has no appenders")]
    NoAppenders { logger: String },

    /// Two declared loggers share the same name
    #[error("Duplicated logger '{name}'")]
    DuplicateLogger { name: String },

    /// No constructor registered for an appender type tag
    #[error("Unknown appender type '{kind}'")]
    UnknownAppenderType { kind: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    pub fn invalid_level(level: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            level: level.into(),
        }
    }

    pub fn duplicate_appender(name: impl Into<String>) -> Self {
        LoggerError::DuplicateAppender { name: name.into() }
    }

    pub fn appender_not_found(name: impl Into<String>) -> Self {
        LoggerError::AppenderNotFound { name: name.into() }
    }

    pub fn no_appenders(logger: impl Into<String>) -> Self {
        LoggerError::NoAppenders {
            logger: logger.into(),
        }
    }

    pub fn duplicate_logger(name: impl Into<String>) -> Self {
        LoggerError::DuplicateLogger { name: name.into() }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
