//! Logging macros for ergonomic log message formatting.
//!
//! These macros forward `format_args!` to the formatted logging methods of
//! [`LeveledLogger`](crate::LeveledLogger), so nothing is formatted when the
//! logger's level filters the call out.
//!
//! # Examples
//!
//! ```
//! use scoped_logger::prelude::*;
//! use scoped_logger::info;
//!
//! let logger = TextLogger::new("server", LogLevel::Info, None);
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use scoped_logger::prelude::*;
/// # let logger = TextLogger::new("test", LogLevel::Error, None);
/// use scoped_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::LeveledLogger as _;
        $logger.log_fmt($level, format_args!($($arg)+))
    }};
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use scoped_logger::prelude::*;
/// # let logger = TextLogger::new("test", LogLevel::Trace, None);
/// use scoped_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use scoped_logger::prelude::*;
/// # let logger = TextLogger::new("test", LogLevel::Warn, None);
/// use scoped_logger::warn;
/// warn!(logger, "Deprecated API used");
/// warn!(logger, "Memory usage: {}%", 85);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
