//! Emitter implementations

pub mod json;
pub mod noop;
pub mod text;

pub use json::JsonLogger;
pub use noop::NoopFormatter;
pub use text::{StringFormatter, TextLogger};
