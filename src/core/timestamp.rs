//! Timestamp formatting for structured records
//!
//! All formats are RFC 3339 with a timezone offset; they differ only in the
//! precision of the seconds field. UTC renders with a `Z` suffix.

use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Precision of the `time` key in JSON records
///
/// # Examples
///
/// ```
/// use scoped_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let instant = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&instant), "2025-01-08T10:30:45Z");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Whole seconds: `2025-01-08T10:30:45+02:00`
    #[default]
    Rfc3339,

    /// Milliseconds: `2025-01-08T10:30:45.123+02:00`
    Rfc3339Millis,

    /// Microseconds: `2025-01-08T10:30:45.123456+02:00`
    Rfc3339Micros,
}

impl TimestampFormat {
    /// Format an instant in its own timezone
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let precision = match self {
            TimestampFormat::Rfc3339 => SecondsFormat::Secs,
            TimestampFormat::Rfc3339Millis => SecondsFormat::Millis,
            TimestampFormat::Rfc3339Micros => SecondsFormat::Micros,
        };
        datetime.to_rfc3339_opts(precision, true)
    }

    /// Format the current local time
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}
