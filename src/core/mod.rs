//! Core logger types and traits

pub mod env_config;
pub mod error;
pub mod event;
pub mod field_value;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod sink;
pub mod timestamp;

pub use env_config::{parse_env, EnvConfig, ENV_PREFIX, FALLBACK_ENV_PREFIX};
pub use error::{LoggerError, Result};
pub use event::Event;
pub use field_value::FieldValue;
pub use formatter::Formatter;
pub use log_level::{AtomicLogLevel, LogLevel};
pub use logger::{LeveledLogger, LoggerFactory};
pub use sink::{BoxedWriter, OutputSink, SharedBuffer};
pub use timestamp::TimestampFormat;

pub(crate) use logger::should_emit;
pub(crate) use sink::SharedTarget;
