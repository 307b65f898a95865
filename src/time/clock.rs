// ============================================================================
// Clock Helpers
// Timestamp formatting and minute bucketing
// ============================================================================

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt;

/// `YYYY-MM-DD HH:mm:ss`
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Milliseconds in one minute.
pub const MINUTE_MS: i64 = 60_000;

/// Errors from converting millisecond timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeError {
    /// Timestamp (ms) outside the representable date range
    OutOfRange(i64),
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::OutOfRange(ms) => write!(f, "timestamp out of range: {} ms", ms),
        }
    }
}

impl std::error::Error for TimeError {}

/// Result type alias for time conversions
pub type TimeResult<T> = Result<T, TimeError>;

/// Format any chrono date-time as `YYYY-MM-DD HH:mm:ss` in its own zone.
pub fn format_datetime<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.format(DATE_FORMAT).to_string()
}

/// Local time as `YYYY-MM-DD HH:mm:ss`; `None` formats the current time.
pub fn date(at_ms: Option<i64>) -> TimeResult<String> {
    let time = match at_ms {
        Some(ms) => Local
            .timestamp_millis_opt(ms)
            .single()
            .ok_or(TimeError::OutOfRange(ms))?,
        None => Local::now(),
    };
    Ok(format_datetime(&time))
}

/// UTC time as `YYYY-MM-DD HH:mm:ss`; `None` formats the current time.
pub fn date_utc(at_ms: Option<i64>) -> TimeResult<String> {
    let time = match at_ms {
        Some(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or(TimeError::OutOfRange(ms))?,
        None => Utc::now(),
    };
    Ok(format_datetime(&time))
}

/// Floor a millisecond timestamp to the start of its minute.
#[inline]
pub fn minute_ms(timestamp_ms: i64) -> i64 {
    timestamp_ms.div_euclid(MINUTE_MS) * MINUTE_MS
}

/// Start of the current minute, in milliseconds since the epoch.
pub fn current_minute_ms() -> i64 {
    minute_ms(Utc::now().timestamp_millis())
}

/// Current UTC time in milliseconds, truncated to the whole second.
pub fn utc_time_ms() -> i64 {
    Utc::now().timestamp() * 1000
}
