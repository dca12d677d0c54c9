//! Timezone handling utilities.
//!
//! This module provides functions for parsing timezone names and
//! moving between UTC instants and wall-clock time in the display zone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{EpgDayError, Result};

/// The zone broadcast schedules are published and displayed in.
///
/// This is IANA `Europe/Moscow`, a constant UTC+3 without DST since
/// 2014-10-26. Earlier dates follow Moscow's history (UTC+4 from 2011 to
/// 2014, seasonal DST before that), so a historical broadcast can land on a
/// different day than under [`FIXED_MSK_TZ`].
pub const DEFAULT_DISPLAY_TZ: Tz = chrono_tz::Europe::Moscow;

/// Moscow time pinned to UTC+3 for every date (`Etc/GMT-3`).
pub const FIXED_MSK_TZ: Tz = chrono_tz::Etc::GMTMinus3;

/// Parse an IANA timezone name into a [`chrono_tz::Tz`].
///
/// # Examples
///
/// ```
/// use epgday_core::tz::parse_tz;
///
/// let tz = parse_tz("Europe/Moscow").unwrap();
/// assert_eq!(tz.to_string(), "Europe/Moscow");
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| EpgDayError::InvalidTimezone(name.to_string()))
}

/// Interpret a wall-clock time as being expressed in `tz`.
///
/// Ambiguous times (DST fall back) resolve to the earlier occurrence.
/// Nonexistent times (DST spring forward) yield `None`.
pub fn local_to_utc(local: NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    let resolved = tz.from_local_datetime(&local);
    resolved
        .single()
        .or_else(|| resolved.earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

/// The calendar date of `instant` in `tz`.
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Whole calendar days from `today` to `date` (negative for the past).
pub fn days_between(today: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Format a datetime as RFC3339 with timezone offset.
///
/// Produces e.g. `"2024-03-15T08:00:00+03:00"`.
pub fn format_rfc3339<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Format a UTC datetime as RFC3339 with Z suffix.
pub fn format_rfc3339_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
