//! Key=value text emitter
//!
//! Records look like `key1=value1 key2=value2 message\n`. There is no
//! timestamp, level or scope token; only the JSON emitter decorates records.

use crate::core::{
    should_emit, AtomicLogLevel, BoxedWriter, Event, Formatter, LeveledLogger, LogLevel,
    OutputSink, SharedTarget,
};
use std::fmt::{self, Write as _};
use std::net::IpAddr;

/// Builds one text record and writes it to the sink on `msg`/`msgf`.
pub struct StringFormatter<'a> {
    buf: String,
    sink: &'a OutputSink,
}

impl<'a> StringFormatter<'a> {
    pub fn new(sink: &'a OutputSink) -> Self {
        Self {
            buf: String::new(),
            sink,
        }
    }

    fn separate(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
    }

    fn field(&mut self, key: &str, value: impl fmt::Display) {
        self.separate();
        // Writing into a String cannot fail
        let _ = write!(self.buf, "{}={}", key, value);
    }

    fn finish(&mut self) {
        self.buf.push('\n');
        self.sink.write_record(self.buf.as_bytes());
    }
}

impl Formatter for StringFormatter<'_> {
    fn msg(&mut self, message: &str) {
        self.separate();
        self.buf.push_str(message);
        self.finish();
    }

    fn msgf(&mut self, args: fmt::Arguments<'_>) {
        self.separate();
        let _ = self.buf.write_fmt(args);
        self.finish();
    }

    fn bool(&mut self, key: &str, b: bool) {
        self.field(key, if b { "true" } else { "false" });
    }

    fn err(&mut self, err: &dyn std::error::Error) {
        self.field("error", err);
    }

    fn float32(&mut self, key: &str, f: f32) {
        self.field(key, scientific(f));
    }

    fn float64(&mut self, key: &str, f: f64) {
        self.field(key, scientific(f));
    }

    fn ip_addr(&mut self, key: &str, ip: IpAddr) {
        self.field(key, ip);
    }

    fn int(&mut self, key: &str, i: isize) {
        self.field(key, i);
    }

    fn int8(&mut self, key: &str, i: i8) {
        self.field(key, i);
    }

    fn int16(&mut self, key: &str, i: i16) {
        self.field(key, i);
    }

    fn int32(&mut self, key: &str, i: i32) {
        self.field(key, i);
    }

    fn int64(&mut self, key: &str, i: i64) {
        self.field(key, i);
    }

    fn str(&mut self, key: &str, val: &str) {
        self.field(key, val);
    }

    fn uint(&mut self, key: &str, u: usize) {
        self.field(key, u);
    }

    fn uint8(&mut self, key: &str, u: u8) {
        self.field(key, u);
    }

    fn uint16(&mut self, key: &str, u: u16) {
        self.field(key, u);
    }

    fn uint32(&mut self, key: &str, u: u32) {
        self.field(key, u);
    }

    fn uint64(&mut self, key: &str, u: u64) {
        self.field(key, u);
    }
}

/// Shortest round-trip scientific notation with a signed, two-digit
/// exponent: `1.5E+00`, `1E-07`, `+Inf`, `NaN`.
fn scientific<T>(value: T) -> String
where
    T: fmt::UpperExp + Into<f64> + Copy,
{
    let wide: f64 = value.into();
    if wide.is_nan() {
        return "NaN".to_string();
    }
    if wide.is_infinite() {
        return if wide > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let raw = format!("{:E}", value);
    match raw.split_once('E') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}E{}{:0>2}", mantissa, sign, digits)
        }
        None => raw,
    }
}

/// Logger that writes key=value text records.
pub struct TextLogger {
    level: AtomicLogLevel,
    sink: OutputSink,
    scope: String,
}

impl TextLogger {
    /// Create a logger for `scope`; `None` output means standard error
    pub fn new(scope: impl Into<String>, level: LogLevel, output: Option<BoxedWriter>) -> Self {
        Self {
            level: AtomicLogLevel::new(level),
            sink: OutputSink::new(output),
            scope: scope.into(),
        }
    }

    pub(crate) fn with_target(scope: &str, level: LogLevel, target: SharedTarget) -> Self {
        Self {
            level: AtomicLogLevel::new(level),
            sink: OutputSink::from_target(target),
            scope: scope.to_string(),
        }
    }

    /// Start a record at `level`.
    ///
    /// Below the logger's level the event is a no-op and allocates nothing.
    pub fn event(&self, level: LogLevel) -> Event<'_> {
        if should_emit(self.level.get(), level) {
            Event::new(StringFormatter::new(&self.sink))
        } else {
            Event::noop()
        }
    }

    pub fn trace_lvl(&self) -> Event<'_> {
        self.event(LogLevel::Trace)
    }

    pub fn debug_lvl(&self) -> Event<'_> {
        self.event(LogLevel::Debug)
    }

    pub fn info_lvl(&self) -> Event<'_> {
        self.event(LogLevel::Info)
    }

    pub fn warn_lvl(&self) -> Event<'_> {
        self.event(LogLevel::Warn)
    }

    pub fn error_lvl(&self) -> Event<'_> {
        self.event(LogLevel::Error)
    }

    /// Records lost to writer failures
    pub fn failed_writes(&self) -> u64 {
        self.sink.failed_writes()
    }
}

impl LeveledLogger for TextLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.event(level).msg(message);
    }

    fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.event(level).msgf(args);
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
