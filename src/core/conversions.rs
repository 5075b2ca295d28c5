//! Timestamp conversions between wire epoch milliseconds and `chrono` types.

use chrono::{DateTime, TimeZone, Utc};

/// Converts any zoned instant to UTC epoch milliseconds.
///
/// The offset of `dt` does not affect the result: two values naming the same instant in
/// different zones yield the same number.
#[must_use]
pub fn datetime_to_millis<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    dt.with_timezone(&Utc).timestamp_millis()
}

/// Converts epoch milliseconds to a UTC instant.
///
/// Returns `None` for values outside `chrono`'s representable range.
#[must_use]
pub fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}
