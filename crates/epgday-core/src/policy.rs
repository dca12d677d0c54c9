//! Caller-side policies layered on top of [`group_by_day`].
//!
//! Grouping never reorders items inside a bucket and never hides a day.
//! Presentation surfaces that want either behavior opt in here.
//!
//! [`group_by_day`]: crate::group::group_by_day

use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{EpgDayError, Result};
use crate::models::{DayBucket, Scheduled};
use crate::parse::parse_broadcast_time_opt;

/// Which bucket a schedule view should open on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionablePolicy {
    /// Always the first bucket in proximity order.
    #[default]
    FirstBucket,
    /// Move past today when every dated showing of today has already started.
    SkipElapsedToday,
}

impl std::fmt::Display for ActionablePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionablePolicy::FirstBucket => write!(f, "first_bucket"),
            ActionablePolicy::SkipElapsedToday => write!(f, "skip_elapsed_today"),
        }
    }
}

impl FromStr for ActionablePolicy {
    type Err = EpgDayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "first_bucket" => Ok(ActionablePolicy::FirstBucket),
            "skip_elapsed_today" => Ok(ActionablePolicy::SkipElapsedToday),
            _ => Err(EpgDayError::InvalidPolicy(s.to_string())),
        }
    }
}

/// Index of the bucket a view should open on, or `None` when there are no
/// buckets.
///
/// With [`ActionablePolicy::SkipElapsedToday`], a leading "today" bucket
/// whose dated items all started before `now` is skipped in favor of the
/// first upcoming day. If no upcoming day exists the first bucket is kept.
pub fn nearest_actionable<R: Scheduled>(
    buckets: &[DayBucket<R>],
    now: DateTime<Utc>,
    tz: Tz,
    policy: ActionablePolicy,
) -> Option<usize> {
    let first = buckets.first()?;

    match policy {
        ActionablePolicy::FirstBucket => Some(0),
        ActionablePolicy::SkipElapsedToday => {
            if !first.is_today() || has_upcoming(first, now, tz) {
                return Some(0);
            }
            let upcoming = buckets
                .iter()
                .position(|bucket| bucket.day_offset.is_some_and(|offset| offset >= 1));
            Some(upcoming.unwrap_or(0))
        }
    }
}

fn has_upcoming<R: Scheduled>(bucket: &DayBucket<R>, now: DateTime<Utc>, tz: Tz) -> bool {
    bucket.items.iter().any(|item| {
        parse_broadcast_time_opt(item.broadcast_time(), tz).is_some_and(|p| p.instant >= now)
    })
}

/// Order a bucket's items by broadcast instant.
///
/// The sort is stable; items without a parseable time keep their relative
/// order after every timed item.
pub fn sort_items_by_time<R: Scheduled>(bucket: &mut DayBucket<R>, tz: Tz) {
    bucket.items.sort_by_cached_key(|item| {
        match parse_broadcast_time_opt(item.broadcast_time(), tz) {
            Some(parsed) => (false, Some(parsed.instant)),
            None => (true, None),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::group::group_by_day;
    use crate::models::MovieRecord;
    use chrono::TimeZone;

    const MOSCOW: Tz = chrono_tz::Europe::Moscow;

    fn at_moscow(h: u32, m: u32) -> DateTime<Utc> {
        MOSCOW
            .with_ymd_and_hms(2024, 3, 15, h, m, 0)
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn schedule() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new("yesterday", Some("2024-03-14 21:00")),
            MovieRecord::new("morning", Some("2024-03-15 09:00")),
            MovieRecord::new("evening", Some("2024-03-15 20:00")),
            MovieRecord::new("tomorrow", Some("2024-03-16 10:00")),
        ]
    }

    #[test]
    fn first_bucket_ignores_elapsed_showings() {
        let now = at_moscow(23, 0);
        let buckets = group_by_day(schedule(), now, &DisplayConfig::default());
        let idx = nearest_actionable(&buckets, now, MOSCOW, ActionablePolicy::FirstBucket);
        assert_eq!(idx, Some(0));
    }

    #[test]
    fn skip_elapsed_today_jumps_to_tomorrow() {
        let now = at_moscow(23, 0);
        let buckets = group_by_day(schedule(), now, &DisplayConfig::default());
        let idx =
            nearest_actionable(&buckets, now, MOSCOW, ActionablePolicy::SkipElapsedToday).unwrap();
        assert_eq!(buckets[idx].key, "2024-03-16");
    }

    #[test]
    fn skip_elapsed_today_stays_while_something_is_upcoming() {
        let now = at_moscow(12, 0);
        let buckets = group_by_day(schedule(), now, &DisplayConfig::default());
        let idx = nearest_actionable(&buckets, now, MOSCOW, ActionablePolicy::SkipElapsedToday);
        assert_eq!(idx, Some(0));
    }

    #[test]
    fn showing_starting_right_now_is_upcoming() {
        let now = at_moscow(20, 0);
        let buckets = group_by_day(schedule(), now, &DisplayConfig::default());
        let idx = nearest_actionable(&buckets, now, MOSCOW, ActionablePolicy::SkipElapsedToday);
        assert_eq!(idx, Some(0));
    }

    #[test]
    fn skip_elapsed_today_without_future_keeps_today() {
        let now = at_moscow(23, 0);
        let movies = vec![
            MovieRecord::new("morning", Some("2024-03-15 09:00")),
            MovieRecord::new("old", Some("2024-03-10 09:00")),
        ];
        let buckets = group_by_day(movies, now, &DisplayConfig::default());
        let idx = nearest_actionable(&buckets, now, MOSCOW, ActionablePolicy::SkipElapsedToday);
        assert_eq!(idx, Some(0));
    }

    #[test]
    fn no_buckets_no_target() {
        let buckets: Vec<DayBucket<MovieRecord>> = Vec::new();
        let idx = nearest_actionable(&buckets, at_moscow(12, 0), MOSCOW, Default::default());
        assert_eq!(idx, None);
    }

    #[test]
    fn sort_by_time_is_stable_and_puts_untimed_last() {
        let mut bucket = DayBucket {
            key: "2024-03-15".to_string(),
            label: "Сегодня".to_string(),
            date: None,
            day_offset: Some(0),
            items: vec![
                MovieRecord::new("late", Some("2024-03-15 22:00")),
                MovieRecord::new("odd-1", Some("??")),
                MovieRecord::new("early", Some("2024-03-15T06:00:00+03:00")),
                MovieRecord::new("odd-2", None),
                MovieRecord::new("noon", Some("2024-03-15 12:00")),
            ],
        };

        sort_items_by_time(&mut bucket, MOSCOW);

        let ids: Vec<_> = bucket.items.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["early", "noon", "late", "odd-1", "odd-2"]);
    }

    #[test]
    fn policy_from_str() {
        assert_eq!(
            ActionablePolicy::from_str("skip_elapsed_today").unwrap(),
            ActionablePolicy::SkipElapsedToday
        );
        assert_eq!(
            ActionablePolicy::from_str(&ActionablePolicy::FirstBucket.to_string()).unwrap(),
            ActionablePolicy::FirstBucket
        );
        let err = ActionablePolicy::from_str("random").unwrap_err();
        assert!(matches!(err, EpgDayError::InvalidPolicy(_)));
        assert_eq!(
            err.to_string(),
            "Invalid policy: 'random' (expected 'first_bucket' or 'skip_elapsed_today')"
        );
    }
}
