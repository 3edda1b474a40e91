//! Formatter trait for record encoders
//!
//! A formatter accumulates typed fields for one record and writes the record
//! out when `msg` or `msgf` is called. Each emission gets a fresh formatter.

use std::fmt;
use std::net::IpAddr;

pub trait Formatter {
    fn msg(&mut self, message: &str);
    fn msgf(&mut self, args: fmt::Arguments<'_>);

    fn bool(&mut self, key: &str, b: bool);
    /// Record `err`'s message under the key `"error"`
    fn err(&mut self, err: &dyn std::error::Error);
    fn float32(&mut self, key: &str, f: f32);
    fn float64(&mut self, key: &str, f: f64);
    fn ip_addr(&mut self, key: &str, ip: IpAddr);
    fn int(&mut self, key: &str, i: isize);
    fn int8(&mut self, key: &str, i: i8);
    fn int16(&mut self, key: &str, i: i16);
    fn int32(&mut self, key: &str, i: i32);
    fn int64(&mut self, key: &str, i: i64);
    fn str(&mut self, key: &str, val: &str);
    fn uint(&mut self, key: &str, u: usize);
    fn uint8(&mut self, key: &str, u: u8);
    fn uint16(&mut self, key: &str, u: u16);
    fn uint32(&mut self, key: &str, u: u32);
    fn uint64(&mut self, key: &str, u: u64);
}
