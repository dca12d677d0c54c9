//! Best-effort parsing of EPG broadcast timestamps.
//!
//! Schedule feeds are loosely ISO formatted. Two families are accepted,
//! tried in this order:
//! - offset-aware: `2024-03-15T08:00:00+03:00`, `2024-03-15 08:00Z`,
//!   `2024-03-15T08:00:00.250+0300`
//! - naive: `2024-03-15T08:00:00`, `2024-03-15 08:00`, read as wall-clock
//!   time in the display timezone
//!
//! Both families need a plain four-digit year, and the resulting display-zone
//! date must stay within years 0000-9999 so day keys keep the `YYYY-MM-DD`
//! shape.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{EpgDayError, Result};
use crate::tz::local_to_utc;

/// Which accepted format family matched a broadcast timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastFormat {
    /// Carried an explicit UTC offset or `Z`.
    Offset,
    /// No offset; taken to be display-zone wall-clock time.
    Naive,
}

impl std::fmt::Display for BroadcastFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BroadcastFormat::Offset => write!(f, "offset"),
            BroadcastFormat::Naive => write!(f, "naive"),
        }
    }
}

/// A successfully parsed broadcast timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedBroadcast {
    /// The absolute instant.
    pub instant: DateTime<Utc>,
    /// The same instant in the display timezone.
    pub local: DateTime<Tz>,
    /// The format family that matched.
    pub format: BroadcastFormat,
}

const OFFSET_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a broadcast timestamp, resolving it against the display zone `tz`.
///
/// Offset-aware inputs are converted into `tz`; naive inputs are assumed to
/// already be expressed in `tz`.
///
/// # Examples
///
/// ```
/// use epgday_core::parse::{BroadcastFormat, parse_broadcast_time};
///
/// let tz = chrono_tz::Europe::Moscow;
///
/// let parsed = parse_broadcast_time("2024-03-15T05:00:00Z", tz).unwrap();
/// assert_eq!(parsed.local.format("%H:%M").to_string(), "08:00");
/// assert_eq!(parsed.format, BroadcastFormat::Offset);
///
/// let parsed = parse_broadcast_time("2024-03-15 08:00", tz).unwrap();
/// assert_eq!(parsed.local.format("%H:%M").to_string(), "08:00");
/// assert_eq!(parsed.format, BroadcastFormat::Naive);
/// ```
pub fn parse_broadcast_time(input: &str, tz: Tz) -> Result<ParsedBroadcast> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(EpgDayError::ParseError("Empty broadcast time".to_string()));
    }

    // chrono's `%Y` also takes signed and longer years, which can land
    // outside the representable local range.
    if !has_four_digit_year(trimmed) {
        return Err(EpgDayError::ParseError(format!(
            "Unrecognized broadcast time: '{}'",
            trimmed
        )));
    }

    if let Some(fixed) = parse_with_offset(trimmed) {
        let instant = fixed.with_timezone(&Utc);
        return in_display_zone(trimmed, instant, tz, BroadcastFormat::Offset);
    }

    if let Some(naive) = parse_naive(trimmed) {
        let instant = local_to_utc(naive, tz).ok_or_else(|| {
            EpgDayError::ParseError(format!(
                "Broadcast time '{}' does not exist in timezone '{}'",
                trimmed, tz
            ))
        })?;
        return in_display_zone(trimmed, instant, tz, BroadcastFormat::Naive);
    }

    Err(EpgDayError::ParseError(format!(
        "Unrecognized broadcast time: '{}'",
        trimmed
    )))
}

/// Parse an optional broadcast timestamp, mapping every failure to `None`.
///
/// This is the graceful-degradation entry point used by the grouping code.
pub fn parse_broadcast_time_opt(input: Option<&str>, tz: Tz) -> Option<ParsedBroadcast> {
    let raw = input?;
    match parse_broadcast_time(raw, tz) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::debug!(input = raw, %err, "treating broadcast time as undated");
            None
        }
    }
}

fn has_four_digit_year(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-'
}

fn in_display_zone(
    input: &str,
    instant: DateTime<Utc>,
    tz: Tz,
    format: BroadcastFormat,
) -> Result<ParsedBroadcast> {
    let local = instant.with_timezone(&tz);
    if !(0..=9999).contains(&local.year()) {
        return Err(EpgDayError::ParseError(format!(
            "Broadcast time '{}' falls outside years 0000-9999 in timezone '{}'",
            input, tz
        )));
    }
    Ok(ParsedBroadcast {
        instant,
        local,
        format,
    })
}

fn parse_with_offset(input: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt);
    }

    // RFC3339 needs seconds and a `T`; normalize a trailing `Z` so the
    // relaxed formats below can read it as an offset.
    let normalized = match input.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => input.to_string(),
    };

    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&normalized, fmt).ok())
}

fn parse_naive(input: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}
