//! Chained event builder for text records
//!
//! # Example
//!
//! ```
//! use scoped_logger::{LogLevel, SharedBuffer, TextLogger};
//!
//! let buffer = SharedBuffer::new();
//! let logger = TextLogger::new("api", LogLevel::Info, Some(Box::new(buffer.clone())));
//!
//! logger.info_lvl()
//!     .str("method", "GET")
//!     .uint16("status", 200)
//!     .msg("request served");
//!
//! assert_eq!(buffer.contents(), "method=GET status=200 request served\n");
//! ```

use super::formatter::Formatter;
use crate::emitters::{NoopFormatter, StringFormatter};
use std::fmt;
use std::net::IpAddr;

enum EventFormatter<'a> {
    Active(StringFormatter<'a>),
    Noop(NoopFormatter),
}

/// One record under construction. Consumed by `msg` or `msgf`.
#[must_use = "an event is only written by msg or msgf"]
pub struct Event<'a> {
    formatter: EventFormatter<'a>,
}

impl<'a> Event<'a> {
    pub(crate) fn new(formatter: StringFormatter<'a>) -> Self {
        Self {
            formatter: EventFormatter::Active(formatter),
        }
    }

    /// An event that discards everything
    pub fn noop() -> Self {
        Self {
            formatter: EventFormatter::Noop(NoopFormatter),
        }
    }

    /// Whether this event will produce output
    pub fn is_enabled(&self) -> bool {
        matches!(self.formatter, EventFormatter::Active(_))
    }

    fn formatter(&mut self) -> &mut dyn Formatter {
        match &mut self.formatter {
            EventFormatter::Active(f) => f,
            EventFormatter::Noop(f) => f,
        }
    }

    pub fn bool(mut self, key: &str, b: bool) -> Self {
        self.formatter().bool(key, b);
        self
    }

    pub fn err(mut self, err: &dyn std::error::Error) -> Self {
        self.formatter().err(err);
        self
    }

    pub fn float32(mut self, key: &str, f: f32) -> Self {
        self.formatter().float32(key, f);
        self
    }

    pub fn float64(mut self, key: &str, f: f64) -> Self {
        self.formatter().float64(key, f);
        self
    }

    pub fn ip_addr(mut self, key: &str, ip: IpAddr) -> Self {
        self.formatter().ip_addr(key, ip);
        self
    }

    pub fn int(mut self, key: &str, i: isize) -> Self {
        self.formatter().int(key, i);
        self
    }

    pub fn int8(mut self, key: &str, i: i8) -> Self {
        self.formatter().int8(key, i);
        self
    }

    pub fn int16(mut self, key: &str, i: i16) -> Self {
        self.formatter().int16(key, i);
        self
    }

    pub fn int32(mut self, key: &str, i: i32) -> Self {
        self.formatter().int32(key, i);
        self
    }

    pub fn int64(mut self, key: &str, i: i64) -> Self {
        self.formatter().int64(key, i);
        self
    }

    pub fn str(mut self, key: &str, val: &str) -> Self {
        self.formatter().str(key, val);
        self
    }

    pub fn uint(mut self, key: &str, u: usize) -> Self {
        self.formatter().uint(key, u);
        self
    }

    pub fn uint8(mut self, key: &str, u: u8) -> Self {
        self.formatter().uint8(key, u);
        self
    }

    pub fn uint16(mut self, key: &str, u: u16) -> Self {
        self.formatter().uint16(key, u);
        self
    }

    pub fn uint32(mut self, key: &str, u: u32) -> Self {
        self.formatter().uint32(key, u);
        self
    }

    pub fn uint64(mut self, key: &str, u: u64) -> Self {
        self.formatter().uint64(key, u);
        self
    }

    /// Finish the record with `message` and write it
    pub fn msg(mut self, message: &str) {
        self.formatter().msg(message);
    }

    /// Finish the record with a formatted message and write it
    pub fn msgf(mut self, args: fmt::Arguments<'_>) {
        self.formatter().msgf(args);
    }
}
