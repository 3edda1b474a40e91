//! The leveled logger contract shared by every emitter

use super::log_level::LogLevel;
use super::sink::BoxedWriter;
use std::fmt;

/// Operations every logger exposes.
///
/// Implementors supply `log`, `log_fmt` and the level/output plumbing; the
/// per-level methods are provided on top. Implementations must return before
/// formatting anything when the request is filtered out.
pub trait LeveledLogger: Send + Sync {
    /// Emit a preformatted message at `level`
    fn log(&self, level: LogLevel, message: &str);

    /// Emit a message formatted from `args` at `level`
    fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>);

    fn level(&self) -> LogLevel;

    fn set_level(&self, level: LogLevel);

    fn scope(&self) -> &str;

    /// Point this logger at `output`; `None` resets to standard error
    fn set_output(&self, output: Option<BoxedWriter>);

    /// Chainable form of [`set_output`](Self::set_output)
    fn with_output(&self, output: BoxedWriter) -> &dyn LeveledLogger;

    #[inline]
    fn is_enabled(&self, level: LogLevel) -> bool {
        should_emit(self.level(), level)
    }

    #[inline]
    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    fn tracef(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Trace, args);
    }

    #[inline]
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Debug, args);
    }

    #[inline]
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Info, args);
    }

    #[inline]
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Warn, args);
    }

    #[inline]
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Error, args);
    }
}

/// Builds loggers for named scopes
pub trait LoggerFactory {
    fn new_logger(&self, scope: &str) -> Box<dyn LeveledLogger>;
}

/// Filter rule shared by all emitters. A request at `Disabled` is never
/// emitted, whatever the current level.
#[inline]
pub(crate) fn should_emit(current: LogLevel, request: LogLevel) -> bool {
    request != LogLevel::Disabled && current >= request
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_emit() {
        assert!(should_emit(LogLevel::Warn, LogLevel::Error));
        assert!(should_emit(LogLevel::Warn, LogLevel::Warn));
        assert!(!should_emit(LogLevel::Warn, LogLevel::Info));
        assert!(!should_emit(LogLevel::Disabled, LogLevel::Error));
        assert!(!should_emit(LogLevel::Trace, LogLevel::Disabled));
    }

    #[test]
    fn test_is_enabled_follows_level() {
        let logger = crate::TextLogger::new("gate", LogLevel::Warn, Some(Box::new(std::io::sink())));
        let logger: &dyn LeveledLogger = &logger;

        assert!(logger.is_enabled(LogLevel::Error));
        assert!(logger.is_enabled(LogLevel::Warn));
        assert!(!logger.is_enabled(LogLevel::Info));

        logger.set_level(LogLevel::Trace);
        assert!(logger.is_enabled(LogLevel::Trace));
        assert!(!logger.is_enabled(LogLevel::Disabled));

        logger.set_level(LogLevel::Disabled);
        assert!(!logger.is_enabled(LogLevel::Error));
    }
}
