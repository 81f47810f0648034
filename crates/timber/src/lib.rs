#![deny(missing_docs)]

//! Sets up the subscriber that prints tracing events to stderr.
//! Nothing is printed unless a level is asked for, so stdout stays clean for
//! whatever a command writes there.

mod formatter;

use clap::ValueEnum;
pub use tracing_core::Level;

/// Every level accepted by `--log`, least to most verbose.
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// The `--log` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only failures
    Error,
    /// Failures and suspicious input
    Warn,
    /// Progress through a command
    Info,
    /// Request planning and transport details
    Debug,
    /// Everything, including thread ids
    Trace,
}

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Level {
        match value {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Installs the global subscriber. Must be called at most once per process.
pub fn init(level: Option<Level>) {
    // by default, no logs are printed.
    let Some(level) = level else {
        return;
    };
    if level <= Level::WARN {
        formatter::least_verbose(level);
    } else if level == Level::TRACE {
        formatter::very_verbose(level);
    } else {
        formatter::verbose(level);
    }
}
