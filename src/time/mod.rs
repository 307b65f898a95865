// ============================================================================
// Time Module
// Date formatting, minute buckets and delays
// ============================================================================

mod clock;
#[cfg(feature = "async")]
mod wait;

pub use clock::{
    current_minute_ms, date, date_utc, format_datetime, minute_ms, utc_time_ms, TimeError,
    TimeResult, DATE_FORMAT, MINUTE_MS,
};
#[cfg(feature = "async")]
pub use wait::wait;
