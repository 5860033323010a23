//! Built-in appender types and the factory that builds appenders from configuration

pub mod console;
pub mod factory;
pub mod file;

pub use console::{ConsoleOptions, ConsoleSink, ConsoleTarget};
pub use factory::{AppenderConstructor, AppenderFactory};
pub use file::{FileOptions, FileSink};
