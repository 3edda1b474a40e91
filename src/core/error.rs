//! Error types for the logger system
//!
//! The leveled logging API never returns these; they surface only from the
//! fallible building blocks (sink writes, level parsing) and are reported to
//! standard error by the emitters.

use std::io::{self, Write};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error from the output target
    #[error(transparent)]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Level name or raw value outside the known set
    #[error("Invalid log level: '{value}'")]
    InvalidLevel { value: String },
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(value: impl Into<String>) -> Self {
        LoggerError::InvalidLevel {
            value: value.into(),
        }
    }
}

/// Report a failed record write on standard error.
pub(crate) fn report_write_error(err: &LoggerError) {
    write_diagnostic(&mut io::stderr().lock(), err);
}

/// Write the diagnostic line for `err` to `out`. A failing `out` is ignored.
pub(crate) fn write_diagnostic<W: Write>(out: &mut W, err: &LoggerError) {
    let _ = writeln!(out, "error writing log {}", err);
}
