//! # epgday-core
//!
//! Broadcast-day grouping for EPG movie feeds.
//!
//! This library groups movie records into calendar-day buckets of their
//! broadcast time in a display timezone, labels each day relative to today
//! and orders the days by how close they are.
//!
//! ## Features
//!
//! - **One grouping rule**: Today, Tomorrow, later days ascending, Yesterday,
//!   earlier days descending, undated last.
//! - **Graceful degradation**: Missing or unparseable broadcast times land in
//!   a single undated bucket instead of failing.
//! - **Injectable context**: The reference instant, display timezone and
//!   label language are all arguments.
//! - **Loose timestamp parsing**: Offset-aware ISO-8601 or naive
//!   `YYYY-MM-DD[T ]HH:MM[:SS]` in the display zone.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use epgday_core::prelude::*;
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
//! let movies = vec![
//!     MovieRecord::new("1", Some("2024-03-15T20:00:00+03:00")),
//!     MovieRecord::new("2", Some("2024-03-14 21:00")),
//! ];
//!
//! for bucket in group_by_day(movies, now, &DisplayConfig::default()) {
//!     println!("{} ({})", bucket.label, bucket.items.len());
//! }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod group;
pub mod locale;
pub mod models;
pub mod parse;
pub mod policy;
pub mod tz;

// Re-export commonly used types at the crate root
pub use config::DisplayConfig;
pub use error::{EpgDayError, Result};
pub use group::{group_by_day, group_by_day_now};
pub use locale::Locale;
pub use models::{DayBucket, MovieRecord, MoviesResponse, NO_DATE_KEY, Scheduled};
pub use parse::{BroadcastFormat, ParsedBroadcast, parse_broadcast_time};

/// Prelude module for convenient imports.
///
/// ```
/// use epgday_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::DisplayConfig;
    pub use crate::display::{DayOption, day_options, format_broadcast_time};
    pub use crate::error::{EpgDayError, Result};
    pub use crate::group::{group_by_day, group_by_day_now};
    pub use crate::locale::Locale;
    pub use crate::models::*;
    pub use crate::parse::{BroadcastFormat, ParsedBroadcast, parse_broadcast_time};
    pub use crate::policy::{ActionablePolicy, nearest_actionable, sort_items_by_time};
    pub use crate::tz::{DEFAULT_DISPLAY_TZ, FIXED_MSK_TZ, parse_tz};
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn full_workflow_from_backend_json() {
        let json = r#"{
            "movies": [
                {"id": "1", "epg_data": {"broadcast_time": "2024-03-15T20:00:00+03:00"}},
                {"id": "2", "epg_data": {"broadcast_time": "2024-03-16 00:00"}},
                {"id": "3", "epg_data": {}}
            ],
            "pagination": {"page": 1, "per_page": 50, "total": 3, "pages": 1}
        }"#;
        let response: MoviesResponse = serde_json::from_str(json).unwrap();
        let now = chrono::Utc
            .with_ymd_and_hms(2024, 3, 15, 9, 0, 0)
            .single()
            .unwrap();

        let buckets = group_by_day(&response.movies, now, &DisplayConfig::default());

        let keys: Vec<_> = buckets.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, ["2024-03-15", "2024-03-16", NO_DATE_KEY]);
        assert_eq!(buckets[1].label, "Завтра");
        assert_eq!(buckets[1].items[0].id, "2");
    }

    #[test]
    fn prelude_exports() {
        use crate::prelude::*;

        let _tz = parse_tz("UTC").unwrap();
        let _policy = ActionablePolicy::default();
        let _locale = Locale::En;
    }
}
