//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI32, Ordering};

/// Severity of a log call, ordered by increasing verbosity.
///
/// A logger whose level is `L` emits a request at `R` when `L >= R`, so
/// `Disabled` silences everything and `Trace` lets everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[repr(i32)]
pub enum LogLevel {
    Disabled = 0,
    #[default]
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    /// All levels, least verbose first
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Disabled,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Canonical display name
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Disabled => "Disabled",
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Uppercase name used in structured records
    pub fn to_upper_str(&self) -> &'static str {
        match self {
            LogLevel::Disabled => "DISABLED",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Suffix of the environment variables that configure this level
    pub fn env_name(&self) -> &'static str {
        match self {
            LogLevel::Disabled => "DISABLE",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// Canonical name of a raw level value, `"UNKNOWN"` when out of range
    pub fn name_of(raw: i32) -> &'static str {
        LogLevel::try_from(raw).map_or("UNKNOWN", |level| level.to_str())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<i32> for LogLevel {
    type Error = LoggerError;

    fn try_from(raw: i32) -> Result<Self, LoggerError> {
        match raw {
            0 => Ok(LogLevel::Disabled),
            1 => Ok(LogLevel::Error),
            2 => Ok(LogLevel::Warn),
            3 => Ok(LogLevel::Info),
            4 => Ok(LogLevel::Debug),
            5 => Ok(LogLevel::Trace),
            _ => Err(LoggerError::invalid_level(raw.to_string())),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DISABLE" | "DISABLED" => Ok(LogLevel::Disabled),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

/// A level that can be read and replaced from any thread.
///
/// Stores use `Release` and loads use `Acquire`, so a `set` on one thread is
/// observed by every later `get` on another.
#[derive(Debug)]
pub struct AtomicLogLevel(AtomicI32);

impl AtomicLogLevel {
    pub const fn new(level: LogLevel) -> Self {
        Self(AtomicI32::new(level as i32))
    }

    #[inline]
    pub fn set(&self, level: LogLevel) {
        self.0.store(level as i32, Ordering::Release);
    }

    #[inline]
    pub fn get(&self) -> LogLevel {
        // Only `set` writes the cell, so the value is always in range.
        LogLevel::try_from(self.0.load(Ordering::Acquire)).unwrap_or(LogLevel::Disabled)
    }

    /// Whether a request at `at` passes the current level
    #[inline]
    pub fn enabled(&self, at: LogLevel) -> bool {
        self.get() >= at
    }
}

impl Default for AtomicLogLevel {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl From<LogLevel> for AtomicLogLevel {
    fn from(level: LogLevel) -> Self {
        Self::new(level)
    }
}

impl fmt::Display for AtomicLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.get(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_level_order() {
        assert!(LogLevel::Disabled < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
    }

    #[test]
    fn test_level_string() {
        let expected = [
            (LogLevel::Disabled as i32, "Disabled"),
            (LogLevel::Error as i32, "Error"),
            (LogLevel::Warn as i32, "Warn"),
            (LogLevel::Info as i32, "Info"),
            (LogLevel::Debug as i32, "Debug"),
            (LogLevel::Trace as i32, "Trace"),
            (999, "UNKNOWN"),
            (-1, "UNKNOWN"),
        ];

        for (raw, name) in expected {
            assert_eq!(LogLevel::name_of(raw), name);
        }
        assert_eq!(LogLevel::Warn.to_string(), "Warn");
    }

    #[test]
    fn test_parse() {
        assert_eq!("disable".parse::<LogLevel>().unwrap(), LogLevel::Disabled);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("TRACE".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert!("fatal".parse::<LogLevel>().is_err());
        assert!(LogLevel::try_from(6).is_err());
    }

    #[test]
    fn test_atomic_set_get() {
        let level = AtomicLogLevel::new(LogLevel::Disabled);
        level.set(LogLevel::Error);
        assert_eq!(level.get(), LogLevel::Error);

        assert!(level.enabled(LogLevel::Error));
        assert!(!level.enabled(LogLevel::Warn));
    }

    #[test]
    fn test_atomic_visible_across_threads() {
        let level = Arc::new(AtomicLogLevel::new(LogLevel::Error));
        let writer = Arc::clone(&level);

        std::thread::spawn(move || writer.set(LogLevel::Trace))
            .join()
            .unwrap();

        assert_eq!(level.get(), LogLevel::Trace);
    }
}
