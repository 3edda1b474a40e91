//! JSON emitter for structured logging
//!
//! Writes each record as a single-line JSON object (JSONL format) with the
//! keys `time`, `level`, `msg` and `scope` first, followed by caller fields.
//! Compatible with log aggregation tools like ELK, Loki, etc.

use crate::core::{
    should_emit, AtomicLogLevel, BoxedWriter, FieldValue, LeveledLogger, LogLevel, OutputSink,
    Result, SharedTarget, TimestampFormat,
};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

const TIME_KEY: &str = "time";
const LEVEL_KEY: &str = "level";
const MESSAGE_KEY: &str = "msg";
const SCOPE_KEY: &str = "scope";

/// Key used for arguments that do not form a string-keyed pair
pub const BAD_KEY: &str = "!BADKEY";

/// Logger that writes one JSON object per record.
///
/// # Example
///
/// ```
/// use scoped_logger::{JsonLogger, LogLevel, SharedBuffer};
///
/// let buffer = SharedBuffer::new();
/// let logger = JsonLogger::new("api", LogLevel::Info, Some(Box::new(buffer.clone())));
///
/// logger.info_with("Processing request", &["method".into(), "GET".into()]);
///
/// let record: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
/// assert_eq!(record["level"], "INFO");
/// assert_eq!(record["method"], "GET");
/// ```
pub struct JsonLogger {
    level: AtomicLogLevel,
    sink: OutputSink,
    scope: String,
    timestamp_format: TimestampFormat,
}

impl JsonLogger {
    /// Create a logger for `scope`; `None` output means standard error
    pub fn new(scope: impl Into<String>, level: LogLevel, output: Option<BoxedWriter>) -> Self {
        Self {
            level: AtomicLogLevel::new(level),
            sink: OutputSink::new(output),
            scope: scope.into(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    pub(crate) fn with_target(scope: &str, level: LogLevel, target: SharedTarget) -> Self {
        Self {
            level: AtomicLogLevel::new(level),
            sink: OutputSink::from_target(target),
            scope: scope.to_string(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the precision of the `time` key
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        self.timestamp_format
    }

    /// Emit `message` with structured fields.
    ///
    /// `args` alternates keys and values. A key that is not a string, or a
    /// trailing key without a value, is written under `"!BADKEY"`. Fields
    /// named `time`, `level`, `msg` or `scope` are dropped so the record's own
    /// keys appear exactly once. Every key appears at most once: a repeated
    /// key, `"!BADKEY"` included, keeps its first position and its last value.
    pub fn log_with(&self, level: LogLevel, message: &str, args: &[FieldValue]) {
        if !should_emit(self.level.get(), level) {
            return;
        }
        self.emit(level, message, args);
    }

    pub fn trace_with(&self, message: &str, args: &[FieldValue]) {
        self.log_with(LogLevel::Trace, message, args);
    }

    pub fn debug_with(&self, message: &str, args: &[FieldValue]) {
        self.log_with(LogLevel::Debug, message, args);
    }

    pub fn info_with(&self, message: &str, args: &[FieldValue]) {
        self.log_with(LogLevel::Info, message, args);
    }

    pub fn warn_with(&self, message: &str, args: &[FieldValue]) {
        self.log_with(LogLevel::Warn, message, args);
    }

    pub fn error_with(&self, message: &str, args: &[FieldValue]) {
        self.log_with(LogLevel::Error, message, args);
    }

    /// Records lost to writer or serialization failures
    pub fn failed_writes(&self) -> u64 {
        self.sink.failed_writes()
    }

    fn emit(&self, level: LogLevel, message: &str, args: &[FieldValue]) {
        let time = self.timestamp_format.now();
        match self.encode(&time, level, message, args) {
            Ok(record) => self.sink.write_record(&record),
            Err(err) => self.sink.report_failure(&err),
        }
    }

    fn encode(
        &self,
        time: &str,
        level: LogLevel,
        message: &str,
        args: &[FieldValue],
    ) -> Result<Vec<u8>> {
        let mut record = Map::new();
        record.insert(TIME_KEY.to_string(), Value::from(time));
        record.insert(LEVEL_KEY.to_string(), Value::from(level.to_upper_str()));
        record.insert(MESSAGE_KEY.to_string(), Value::from(message));
        record.insert(SCOPE_KEY.to_string(), Value::from(self.scope.as_str()));
        append_fields(&mut record, args);

        let mut bytes = serde_json::to_vec(&record)?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

fn is_reserved(key: &str) -> bool {
    matches!(key, TIME_KEY | LEVEL_KEY | MESSAGE_KEY | SCOPE_KEY)
}

fn append_fields(record: &mut Map<String, Value>, args: &[FieldValue]) {
    let mut args = args.iter();
    while let Some(first) = args.next() {
        let (key, value) = match first.as_key() {
            Some(key) => match args.next() {
                Some(value) => (key, value),
                None => (BAD_KEY, first),
            },
            None => (BAD_KEY, first),
        };

        if is_reserved(key) {
            continue;
        }
        record.insert(key.to_string(), value.to_json_value());
    }
}

impl LeveledLogger for JsonLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.log_with(level, message, &[]);
    }

    fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !should_emit(self.level.get(), level) {
            return;
        }
        let message = match args.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(args.to_string()),
        };
        self.emit(level, &message, &[]);
    }

    fn level(&self) -> LogLevel {
        self.level.get()
    }

    fn set_level(&self, level: LogLevel) {
        self.level.set(level);
    }

    fn scope(&self) -> &str {
        &self.scope
    }

    fn set_output(&self, output: Option<BoxedWriter>) {
        self.sink.set_output(output);
    }

    fn with_output(&self, output: BoxedWriter) -> &dyn LeveledLogger {
        self.set_output(Some(output));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SharedBuffer;
    use chrono::DateTime;

    fn logger_at(level: LogLevel) -> (JsonLogger, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let logger = JsonLogger::new("test-scope", level, Some(Box::new(buffer.clone())));
        (logger, buffer)
    }

    fn parse(buffer: &SharedBuffer) -> Value {
        serde_json::from_str(buffer.contents().trim()).expect("Output should be valid JSON")
    }

    #[test]
    fn test_structured_output() {
        let (logger, buffer) = logger_at(LogLevel::Info);
        logger.info("test message");

        let record = parse(&buffer);
        assert_eq!(record["level"], "INFO");
        assert_eq!(record["msg"], "test message");
        assert_eq!(record["scope"], "test-scope");
        let time = record["time"].as_str().expect("time is a string");
        assert!(DateTime::parse_from_rfc3339(time).is_ok(), "{}", time);
    }

    #[test]
    fn test_canonical_key_order() {
        let (logger, buffer) = logger_at(LogLevel::Info);
        logger.info_with("ordered", &["zeta".into(), 1_i32.into(), "alpha".into(), 2_i32.into()]);

        let record = parse(&buffer);
        let keys: Vec<&str> = record
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["time", "level", "msg", "scope", "zeta", "alpha"]);
        assert!(buffer.contents().ends_with('\n'));
    }

    #[test]
    fn test_repeated_keys_keep_last_value() {
        let (logger, buffer) = logger_at(LogLevel::Info);
        logger.info_with(
            "dup",
            &["k".into(), 1_i32.into(), 7_i32.into(), "k".into(), 2_i32.into(), true.into()],
        );

        let record = parse(&buffer);
        let keys: Vec<&str> = record
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["time", "level", "msg", "scope", "k", BAD_KEY]);
        assert_eq!(record["k"], 2);
        assert_eq!(record[BAD_KEY], true);
    }

    #[test]
    fn test_includes_additional_args() {
        let (logger, buffer) = logger_at(LogLevel::Trace);
        logger.log_with(
            LogLevel::Info,
            "Processing request",
            &[
                "method".into(),
                "GET".into(),
                "path".into(),
                "/users".into(),
                "duration_ms".into(),
                15_i64.into(),
                "ok".into(),
                true.into(),
            ],
        );

        let record = parse(&buffer);
        assert_eq!(record["msg"], "Processing request");
        assert_eq!(record["level"], "INFO");
        assert_eq!(record["method"], "GET");
        assert_eq!(record["path"], "/users");
        assert_eq!(record["duration_ms"], 15);
        assert_eq!(record["ok"], true);
    }

    #[test]
    fn test_bad_keys() {
        let (logger, buffer) = logger_at(LogLevel::Info);
        logger.info_with("odd", &[42_i32.into()]);
        assert_eq!(parse(&buffer)[BAD_KEY], 42);

        buffer.clear();
        logger.info_with("dangling", &["orphan".into()]);
        assert_eq!(parse(&buffer)[BAD_KEY], "orphan");
    }

    #[test]
    fn test_reserved_keys_not_duplicated() {
        let (logger, buffer) = logger_at(LogLevel::Warn);
        logger.warn_with("real", &["level".into(), "fake".into(), "msg".into(), "fake".into()]);

        let contents = buffer.contents();
        assert_eq!(contents.matches("\"level\"").count(), 1);
        let record = parse(&buffer);
        assert_eq!(record["level"], "WARN");
        assert_eq!(record["msg"], "real");
    }

    #[test]
    fn test_formatted_message() {
        let (logger, buffer) = logger_at(LogLevel::Info);
        logger.infof(format_args!("formatted message with {}", "argument"));
        assert_eq!(parse(&buffer)["msg"], "formatted message with argument");
    }

    #[test]
    fn test_level_filtering() {
        let (logger, buffer) = logger_at(LogLevel::Trace);
        logger.set_level(LogLevel::Warn);

        logger.debug("debug message");
        logger.info_with("info message", &["k".into(), "v".into()]);
        assert!(buffer.is_empty());

        logger.warn("warn message");
        logger.error("error message");
        let contents = buffer.contents();
        assert!(contents.contains("warn message"));
        assert!(contents.contains("error message"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_timestamp_precision() {
        let (logger, buffer) = logger_at(LogLevel::Info);
        let logger = logger.with_timestamp_format(TimestampFormat::Rfc3339Millis);
        logger.info("precise");

        let record = parse(&buffer);
        let time = record["time"].as_str().expect("time is a string");
        assert!(time.contains('.'), "{}", time);
        assert!(DateTime::parse_from_rfc3339(time).is_ok());
    }

    #[test]
    fn test_non_finite_float_is_null() {
        let (logger, buffer) = logger_at(LogLevel::Info);
        logger.info_with("nan", &["ratio".into(), f64::NAN.into()]);
        assert!(parse(&buffer)["ratio"].is_null());
    }
}
