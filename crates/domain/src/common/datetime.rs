//! Calendar utilities used to derive the daily seed.

use chrono::{DateTime, NaiveDate, Utc};

/// Parses a `YYYY-MM-DD` calendar date.
///
/// # Examples
///
/// ```
/// use skeledle_domain::common::parse_date;
/// use chrono::Datelike;
///
/// let date = parse_date("2024-01-01").unwrap();
/// assert_eq!(date.year(), 2024);
/// ```
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
}

/// Whole UTC calendar days from `epoch` to the date of `now`.
///
/// Negative when `now` falls before the epoch.
///
/// # Examples
///
/// ```
/// use skeledle_domain::common::{days_since, parse_date};
/// use chrono::{TimeZone, Utc};
///
/// let epoch = parse_date("2024-01-01").unwrap();
/// let now = Utc.with_ymd_and_hms(2024, 1, 3, 23, 59, 0).unwrap();
/// assert_eq!(days_since(epoch, now), 2);
/// ```
pub fn days_since(epoch: NaiveDate, now: DateTime<Utc>) -> i64 {
    now.date_naive().signed_duration_since(epoch).num_days()
}
