//! Calendar bucket keys in the reporting time zone.
//!
//! Requests are bucketed by the local calendar in Indian Standard Time,
//! not UTC, so a request submitted shortly after local midnight lands on
//! the right day. IST has no daylight saving, so a fixed offset is exact.

use chrono::{DateTime, Datelike as _, FixedOffset, Utc};

const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// The reporting time zone, UTC+05:30.
pub const REPORT_TIME_ZONE: FixedOffset = match FixedOffset::east_opt(IST_OFFSET_SECS) {
    Some(offset) => offset,
    None => panic!("IST offset out of range"),
};

/// Day, month, and year keys for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketKeys {
    /// `YYYY-MM-DD`
    pub day: String,
    /// `YYYY-MM`
    pub month: String,
    /// Calendar year.
    pub year: i32,
}

/// Derives the bucket keys for `created_at` in [`REPORT_TIME_ZONE`].
#[must_use]
pub fn bucket_keys(created_at: DateTime<Utc>) -> BucketKeys {
    let local = created_at.with_timezone(&REPORT_TIME_ZONE);
    BucketKeys {
        day: local.format("%Y-%m-%d").to_string(),
        month: format!("{:04}-{:02}", local.year(), local.month()),
        year: local.year(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    #[test]
    fn offset_is_five_and_a_half_hours() {
        assert_eq!(REPORT_TIME_ZONE.local_minus_utc(), 19_800);
    }

    #[test]
    fn keys_before_local_midnight() {
        let keys = bucket_keys(Utc.with_ymd_and_hms(2024, 10, 2, 18, 29, 59).unwrap());
        assert_eq!(keys.day, "2024-10-02");
        assert_eq!(keys.month, "2024-10");
        assert_eq!(keys.year, 2024);
    }

    #[test]
    fn keys_roll_over_at_local_midnight() {
        let keys = bucket_keys(Utc.with_ymd_and_hms(2024, 12, 31, 18, 30, 0).unwrap());
        assert_eq!(keys.day, "2025-01-01");
        assert_eq!(keys.month, "2025-01");
        assert_eq!(keys.year, 2025);
    }

    #[test]
    fn month_is_zero_padded() {
        let keys = bucket_keys(Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap());
        assert_eq!(keys.month, "2024-03");
    }
}
