//! Time and timestamp helpers.
//!
//! The server stores timestamps as epoch milliseconds; `0` means "never".

use chrono::{DateTime, Utc};

/// UTC timestamp used for archive times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Convert epoch milliseconds into a timestamp. `0` maps to `None`.
#[must_use]
pub fn from_millis(millis: i64) -> Option<Timestamp> {
    if millis == 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}

/// Convert a timestamp into epoch milliseconds.
#[must_use]
pub fn to_millis(ts: Timestamp) -> i64 {
    ts.timestamp_millis()
}
