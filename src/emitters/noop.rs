//! Formatter that discards everything

use crate::core::Formatter;
use std::fmt;
use std::net::IpAddr;

/// Stands in for a real formatter on call sites below the logger's level.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFormatter;

impl Formatter for NoopFormatter {
    fn msg(&mut self, _message: &str) {}
    fn msgf(&mut self, _args: fmt::Arguments<'_>) {}
    fn bool(&mut self, _key: &str, _b: bool) {}
    fn err(&mut self, _err: &dyn std::error::Error) {}
    fn float32(&mut self, _key: &str, _f: f32) {}
    fn float64(&mut self, _key: &str, _f: f64) {}
    fn ip_addr(&mut self, _key: &str, _ip: IpAddr) {}
    fn int(&mut self, _key: &str, _i: isize) {}
    fn int8(&mut self, _key: &str, _i: i8) {}
    fn int16(&mut self, _key: &str, _i: i16) {}
    fn int32(&mut self, _key: &str, _i: i32) {}
    fn int64(&mut self, _key: &str, _i: i64) {}
    fn str(&mut self, _key: &str, _val: &str) {}
    fn uint(&mut self, _key: &str, _u: usize) {}
    fn uint8(&mut self, _key: &str, _u: u8) {}
    fn uint16(&mut self, _key: &str, _u: u16) {}
    fn uint32(&mut self, _key: &str, _u: u32) {}
    fn uint64(&mut self, _key: &str, _u: u64) {}
}
