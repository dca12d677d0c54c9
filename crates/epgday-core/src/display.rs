//! Rendering helpers for day selectors and schedule cards.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;

use crate::config::DisplayConfig;
use crate::locale::Locale;
use crate::models::DayBucket;
use crate::parse::parse_broadcast_time;
use crate::tz::{DEFAULT_DISPLAY_TZ, FIXED_MSK_TZ};

/// One entry of a day selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayOption {
    pub key: String,
    pub label: String,
    pub date: Option<NaiveDate>,
    pub count: usize,
    pub is_today: bool,
}

/// Summarize buckets as selector entries, keeping bucket order.
pub fn day_options<R>(buckets: &[DayBucket<R>]) -> Vec<DayOption> {
    buckets
        .iter()
        .map(|bucket| DayOption {
            key: bucket.key.clone(),
            label: bucket.label.clone(),
            date: bucket.date,
            count: bucket.items.len(),
            is_today: bucket.is_today(),
        })
        .collect()
}

/// Render a broadcast time in the display zone, suffixed with the zone
/// abbreviation.
///
/// Returns `None` when `raw` is absent or cannot be parsed.
///
/// ```
/// use epgday_core::DisplayConfig;
/// use epgday_core::display::format_broadcast_time;
///
/// let config = DisplayConfig::default();
/// let shown = format_broadcast_time(Some("2024-03-15T05:00:00Z"), &config, false);
/// assert_eq!(shown.as_deref(), Some("08:00 МСК"));
///
/// let shown = format_broadcast_time(Some("2024-03-15T05:00:00Z"), &config, true);
/// assert_eq!(shown.as_deref(), Some("15.03.2024, 08:00 МСК"));
/// ```
pub fn format_broadcast_time(
    raw: Option<&str>,
    config: &DisplayConfig,
    with_date: bool,
) -> Option<String> {
    let parsed = parse_broadcast_time(raw?, config.tz).ok()?;
    let pattern = match (with_date, config.locale) {
        (false, _) => "%H:%M",
        (true, Locale::Ru) => "%d.%m.%Y, %H:%M",
        (true, Locale::En) => "%Y-%m-%d %H:%M",
    };
    let abbreviation = zone_abbreviation(config.tz, config.locale)
        .map(str::to_string)
        .unwrap_or_else(|| parsed.local.format("%Z").to_string());

    Some(format!("{} {}", parsed.local.format(pattern), abbreviation))
}

fn zone_abbreviation(tz: Tz, locale: Locale) -> Option<&'static str> {
    (tz == DEFAULT_DISPLAY_TZ || tz == FIXED_MSK_TZ).then_some(locale.moscow_abbreviation())
}
