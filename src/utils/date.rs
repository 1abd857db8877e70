//! Datetime utilities: parsing display strings to epoch seconds and back.
//! All timestamps are UTC; the wire format of the backend is epoch seconds.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a datetime in the configured display format, falling back to a
/// bare `YYYY-MM-DD` (midnight).
pub fn parse_datetime(s: &str, format: &str) -> Option<i64> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
        return Some(dt.and_utc().timestamp());
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc().timestamp());
    }

    None
}

/// Epoch seconds → display string in the configured format.
pub fn format_epoch(epoch: i64, format: &str) -> String {
    match DateTime::<Utc>::from_timestamp(epoch, 0) {
        Some(dt) => dt.format(format).to_string(),
        None => epoch.to_string(),
    }
}
