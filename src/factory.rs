//! Logger factories
//!
//! A factory resolves a scope to a level and builds loggers that write to the
//! factory's output target. Configuration comes from the environment first
//! (see [`parse_env`](crate::parse_env)); builder methods then override it in
//! call order.
//!
//! # Example
//!
//! ```
//! use scoped_logger::{JsonLoggerFactory, LoggerFactory, LogLevel, SharedBuffer};
//!
//! let buffer = SharedBuffer::new();
//! let factory = JsonLoggerFactory::from_env_with(|_| None)
//!     .with_writer(buffer.clone())
//!     .with_default_level(LogLevel::Warn)
//!     .with_scope_levels([("Database", LogLevel::Debug)]);
//!
//! factory.new_logger("database").debug("pool opened");
//! factory.new_logger("api").info("dropped");
//!
//! assert_eq!(buffer.contents().lines().count(), 1);
//! ```

use crate::core::env_config::{parse_env, process_env, EnvConfig};
use crate::core::sink::{shared_target, SharedTarget};
use crate::core::{LeveledLogger, LogLevel, LoggerFactory, TimestampFormat};
use crate::emitters::{JsonLogger, TextLogger};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

/// Settings shared by both factories
#[derive(Clone)]
struct FactoryConfig {
    default_level: LogLevel,
    scope_levels: HashMap<String, LogLevel>,
    writer: SharedTarget,
}

impl FactoryConfig {
    fn from_env(env: EnvConfig) -> Self {
        Self {
            default_level: env.default_level,
            scope_levels: env.scope_levels,
            writer: shared_target(None),
        }
    }

    fn set_writer<W: Write + Send + 'static>(&mut self, writer: W) {
        self.writer = shared_target(Some(Box::new(writer)));
    }

    fn set_stderr(&mut self) {
        self.writer = shared_target(None);
    }

    fn merge_scope_levels<I, K>(&mut self, levels: I)
    where
        I: IntoIterator<Item = (K, LogLevel)>,
        K: AsRef<str>,
    {
        for (scope, level) in levels {
            self.scope_levels
                .insert(scope.as_ref().to_lowercase(), level);
        }
    }

    /// Overrides are matched exactly; the keys are lowercase, so a
    /// mixed-case scope never finds one.
    fn level_for(&self, scope: &str) -> LogLevel {
        self.scope_levels
            .get(scope)
            .copied()
            .unwrap_or(self.default_level)
    }

    fn target(&self) -> SharedTarget {
        Arc::clone(&self.writer)
    }
}

/// Factory for [`TextLogger`]s
#[derive(Clone)]
pub struct DefaultLoggerFactory {
    config: FactoryConfig,
}

impl DefaultLoggerFactory {
    /// Create a factory configured from the process environment
    pub fn new() -> Self {
        Self::from_env_with(process_env)
    }

    /// Create a factory configured through `getenv`
    pub fn from_env_with<F>(getenv: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            config: FactoryConfig::from_env(parse_env(getenv)),
        }
    }

    /// Send records of loggers built from now on to `writer`
    #[must_use = "builder methods return a new value"]
    pub fn with_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.config.set_writer(writer);
        self
    }

    /// Send records of loggers built from now on to standard error
    #[must_use = "builder methods return a new value"]
    pub fn with_stderr(mut self) -> Self {
        self.config.set_stderr();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_default_level(mut self, level: LogLevel) -> Self {
        self.config.default_level = level;
        self
    }

    /// Merge scope overrides, lowercasing the scope names
    #[must_use = "builder methods return a new value"]
    pub fn with_scope_levels<I, K>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = (K, LogLevel)>,
        K: AsRef<str>,
    {
        self.config.merge_scope_levels(levels);
        self
    }

    pub fn default_level(&self) -> LogLevel {
        self.config.default_level
    }

    pub fn scope_levels(&self) -> &HashMap<String, LogLevel> {
        &self.config.scope_levels
    }

    /// Level a logger for `scope` would start at
    pub fn level_for(&self, scope: &str) -> LogLevel {
        self.config.level_for(scope)
    }

    pub fn new_text_logger(&self, scope: &str) -> TextLogger {
        TextLogger::with_target(scope, self.config.level_for(scope), self.config.target())
    }
}

impl Default for DefaultLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory for DefaultLoggerFactory {
    fn new_logger(&self, scope: &str) -> Box<dyn LeveledLogger> {
        Box::new(self.new_text_logger(scope))
    }
}

/// Factory for [`JsonLogger`]s
#[derive(Clone)]
pub struct JsonLoggerFactory {
    config: FactoryConfig,
    timestamp_format: TimestampFormat,
}

impl JsonLoggerFactory {
    /// Create a factory configured from the process environment
    pub fn new() -> Self {
        Self::from_env_with(process_env)
    }

    /// Create a factory configured through `getenv`
    pub fn from_env_with<F>(getenv: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            config: FactoryConfig::from_env(parse_env(getenv)),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Send records of loggers built from now on to `writer`
    #[must_use = "builder methods return a new value"]
    pub fn with_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.config.set_writer(writer);
        self
    }

    /// Send records of loggers built from now on to standard error
    #[must_use = "builder methods return a new value"]
    pub fn with_stderr(mut self) -> Self {
        self.config.set_stderr();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_default_level(mut self, level: LogLevel) -> Self {
        self.config.default_level = level;
        self
    }

    /// Merge scope overrides, lowercasing the scope names
    #[must_use = "builder methods return a new value"]
    pub fn with_scope_levels<I, K>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = (K, LogLevel)>,
        K: AsRef<str>,
    {
        self.config.merge_scope_levels(levels);
        self
    }

    /// Precision of the `time` key for loggers built from now on
    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn default_level(&self) -> LogLevel {
        self.config.default_level
    }

    pub fn scope_levels(&self) -> &HashMap<String, LogLevel> {
        &self.config.scope_levels
    }

    /// Level a logger for `scope` would start at
    pub fn level_for(&self, scope: &str) -> LogLevel {
        self.config.level_for(scope)
    }

    pub fn new_json_logger(&self, scope: &str) -> JsonLogger {
        JsonLogger::with_target(scope, self.config.level_for(scope), self.config.target())
            .with_timestamp_format(self.timestamp_format)
    }
}

impl Default for JsonLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory for JsonLoggerFactory {
    fn new_logger(&self, scope: &str) -> Box<dyn LeveledLogger> {
        Box::new(self.new_json_logger(scope))
    }
}
