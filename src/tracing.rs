//! Leveled logging to stderr.
//!
//! `info!`, `warn!` and `error!` take `format!` arguments and write a single
//! `[LEVEL] message` line. Nothing logged here ever reaches the output file.

use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
    Info,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
        }
    }
}

/// Writes one log record to `out`.
pub fn write_record<W: Write>(
    out: &mut W,
    level: Level,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    writeln!(out, "[{}] {}", level.label(), args)
}

/// Writes one log record to stderr. A failed write is dropped.
#[doc(hidden)]
pub fn emit(level: Level, args: fmt::Arguments<'_>) {
    let _ = write_record(&mut io::stderr().lock(), level, args);
}

/// Logs an info message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::emit($crate::tracing::Level::Info, format_args!($($arg)*))
    };
}

/// Logs a warning, used for rejected input lines.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::emit($crate::tracing::Level::Warn, format_args!($($arg)*))
    };
}

/// Logs an error that ends the run.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::emit($crate::tracing::Level::Error, format_args!($($arg)*))
    };
}
