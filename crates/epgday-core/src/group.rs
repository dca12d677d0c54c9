//! Broadcast-day grouping.
//!
//! Records are bucketed by the calendar day of their broadcast time in the
//! display timezone, labeled relative to today and ordered by proximity:
//! today, tomorrow, later days ascending, yesterday, earlier days
//! descending, and finally the undated bucket.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::DisplayConfig;
use crate::locale::{Locale, format_day_month};
use crate::models::{DayBucket, NO_DATE_KEY, Scheduled};
use crate::parse::parse_broadcast_time_opt;
use crate::tz::{days_between, local_date};

const TODAY_WEIGHT: i64 = -1000;
const TOMORROW_WEIGHT: i64 = -900;
const YESTERDAY_WEIGHT: i64 = 1000;

/// Group records into ordered broadcast-day buckets.
///
/// Every record lands in exactly one bucket, and items keep their input
/// order within a bucket. A missing, blank or unparseable broadcast time
/// puts the record into the single undated bucket; this never fails.
///
/// # Arguments
///
/// * `records` - The records to group
/// * `now` - Reference instant that decides which day is "today"
/// * `config` - Display timezone and label language
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use epgday_core::prelude::*;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
/// let config = DisplayConfig::default().with_locale(Locale::En);
/// let movies = vec![
///     MovieRecord::new("a", Some("2024-03-16T01:00:00+03:00")),
///     MovieRecord::new("b", Some("2024-03-15 20:00")),
///     MovieRecord::new("c", None),
/// ];
///
/// let buckets = group_by_day(movies, now, &config);
/// let labels: Vec<_> = buckets.iter().map(|b| b.label.as_str()).collect();
/// assert_eq!(labels, ["Today", "Tomorrow", "No date"]);
/// ```
pub fn group_by_day<R, I>(
    records: I,
    now: DateTime<Utc>,
    config: &DisplayConfig,
) -> Vec<DayBucket<R>>
where
    R: Scheduled,
    I: IntoIterator<Item = R>,
{
    let today = local_date(now, config.tz);

    let mut dated: Vec<DayBucket<R>> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut undated: Option<DayBucket<R>> = None;

    for record in records {
        let date = parse_broadcast_time_opt(record.broadcast_time(), config.tz)
            .map(|parsed| parsed.local.date_naive());

        match date {
            Some(date) => {
                let slot = *index.entry(date).or_insert_with(|| {
                    dated.push(dated_bucket(date, today, config.locale));
                    dated.len() - 1
                });
                dated[slot].items.push(record);
            }
            None => undated
                .get_or_insert_with(|| undated_bucket(config.locale))
                .items
                .push(record),
        }
    }

    // Weights are distinct per date except for far-future days colliding
    // with past ones; the date breaks those ties.
    dated.sort_by_key(|bucket| {
        let offset = bucket.day_offset.unwrap_or_default();
        (day_weight(offset), bucket.date)
    });

    tracing::debug!(
        buckets = dated.len() + usize::from(undated.is_some()),
        %today,
        "grouped records by broadcast day"
    );

    dated.extend(undated);
    dated
}

/// [`group_by_day`] against the current wall-clock time.
pub fn group_by_day_now<R, I>(records: I, config: &DisplayConfig) -> Vec<DayBucket<R>>
where
    R: Scheduled,
    I: IntoIterator<Item = R>,
{
    group_by_day(records, Utc::now(), config)
}

/// Sort weight for a bucket `offset` days away from today.
///
/// Lower sorts first. The undated bucket is not weighted here; it is always
/// appended last.
pub fn day_weight(offset: i64) -> i64 {
    match offset {
        0 => TODAY_WEIGHT,
        1 => TOMORROW_WEIGHT,
        -1 => YESTERDAY_WEIGHT,
        d if d > 1 => d,
        d => YESTERDAY_WEIGHT - d,
    }
}

/// Bucket key for a dated bucket, `YYYY-MM-DD`.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Label for a day `offset` days away from today.
///
/// ```
/// use chrono::NaiveDate;
/// use epgday_core::group::day_label;
/// use epgday_core::Locale;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 25).unwrap();
/// assert_eq!(day_label(date, 0, Locale::Ru), "Сегодня");
/// assert_eq!(day_label(date, 10, Locale::Ru), "25 марта");
/// ```
pub fn day_label(date: NaiveDate, offset: i64, locale: Locale) -> String {
    match offset {
        0 => locale.today().to_string(),
        1 => locale.tomorrow().to_string(),
        -1 => locale.yesterday().to_string(),
        _ => format_day_month(date, locale),
    }
}

fn dated_bucket<R>(date: NaiveDate, today: NaiveDate, locale: Locale) -> DayBucket<R> {
    let offset = days_between(today, date);
    DayBucket {
        key: day_key(date),
        label: day_label(date, offset, locale),
        date: Some(date),
        day_offset: Some(offset),
        items: Vec::new(),
    }
}

fn undated_bucket<R>(locale: Locale) -> DayBucket<R> {
    DayBucket {
        key: NO_DATE_KEY.to_string(),
        label: locale.no_date().to_string(),
        date: None,
        day_offset: None,
        items: Vec::new(),
    }
}
