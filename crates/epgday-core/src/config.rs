//! Display configuration shared by every presentation surface.

use chrono_tz::Tz;
use serde::Serialize;

use crate::error::Result;
use crate::locale::Locale;
use crate::tz::{DEFAULT_DISPLAY_TZ, parse_tz};

/// Where and how broadcast days are rendered.
///
/// Naive broadcast timestamps (no offset) are assumed to already be
/// expressed in `tz`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayConfig {
    /// Timezone used to derive calendar days and render times.
    #[serde(serialize_with = "serialize_tz")]
    pub tz: Tz,
    /// Language for bucket labels.
    pub locale: Locale,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tz: DEFAULT_DISPLAY_TZ,
            locale: Locale::default(),
        }
    }
}

impl DisplayConfig {
    pub fn new(tz: Tz, locale: Locale) -> Self {
        Self { tz, locale }
    }

    /// Build a config from an IANA zone name and a locale tag.
    ///
    /// ```
    /// use epgday_core::{DisplayConfig, Locale};
    ///
    /// let config = DisplayConfig::from_names("Europe/Moscow", "en").unwrap();
    /// assert_eq!(config.locale, Locale::En);
    /// assert!(DisplayConfig::from_names("Nowhere/Land", "en").is_err());
    /// ```
    pub fn from_names(tz_name: &str, locale: &str) -> Result<Self> {
        Ok(Self {
            tz: parse_tz(tz_name)?,
            locale: locale.parse()?,
        })
    }

    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    pub fn with_tz(self, tz: Tz) -> Self {
        Self { tz, ..self }
    }
}

fn serialize_tz<S>(tz: &Tz, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(tz)
}
