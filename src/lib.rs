//! # Scoped Logger
//!
//! A leveled, scope-aware logging facility.
//!
//! ## Features
//!
//! - **Per-scope levels**: each logger carries its own atomically mutable level
//! - **Environment driven**: `PION_LOG_<LEVEL>` variables pick levels per scope
//! - **Two emitters**: `key=value` text records and one-object-per-line JSON
//! - **Swappable output**: point any logger at a new writer at runtime
//!
//! ## Example
//!
//! ```
//! use scoped_logger::prelude::*;
//!
//! let buffer = SharedBuffer::new();
//! let factory = DefaultLoggerFactory::from_env_with(|_| None).with_writer(buffer.clone());
//! let logger = factory.new_logger("api");
//!
//! logger.debug("filtered out");
//! logger.error("boom");
//! scoped_logger::error!(logger, "retry {} of {}", 1, 3);
//!
//! assert_eq!(buffer.contents(), "boom\nretry 1 of 3\n");
//! ```

pub mod core;
pub mod emitters;
pub mod factory;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        AtomicLogLevel, BoxedWriter, Event, FieldValue, Formatter, LeveledLogger, LogLevel,
        LoggerError, LoggerFactory, Result, SharedBuffer, TimestampFormat,
    };
    pub use crate::emitters::{JsonLogger, NoopFormatter, TextLogger};
    pub use crate::factory::{DefaultLoggerFactory, JsonLoggerFactory};
}

pub use crate::core::{
    parse_env, AtomicLogLevel, BoxedWriter, EnvConfig, Event, FieldValue, Formatter,
    LeveledLogger, LogLevel, LoggerError, LoggerFactory, OutputSink, Result, SharedBuffer,
    TimestampFormat, ENV_PREFIX, FALLBACK_ENV_PREFIX,
};
pub use emitters::{JsonLogger, NoopFormatter, StringFormatter, TextLogger};
pub use factory::{DefaultLoggerFactory, JsonLoggerFactory};
