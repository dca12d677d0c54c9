//! Display language for bucket labels.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EpgDayError, Result};

/// Supported label languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Russian, the language the schedules are published in.
    #[default]
    Ru,
    /// English.
    En,
}

const RU_MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Locale {
    pub fn today(self) -> &'static str {
        match self {
            Locale::Ru => "Сегодня",
            Locale::En => "Today",
        }
    }

    pub fn tomorrow(self) -> &'static str {
        match self {
            Locale::Ru => "Завтра",
            Locale::En => "Tomorrow",
        }
    }

    pub fn yesterday(self) -> &'static str {
        match self {
            Locale::Ru => "Вчера",
            Locale::En => "Yesterday",
        }
    }

    pub fn no_date(self) -> &'static str {
        match self {
            Locale::Ru => "Без даты",
            Locale::En => "No date",
        }
    }

    /// Month name as it reads after a day number ("15 марта").
    ///
    /// `month` is 1-based; out-of-range values are clamped.
    pub fn month_name(self, month: u32) -> &'static str {
        let idx = month.clamp(1, 12) as usize - 1;
        match self {
            Locale::Ru => RU_MONTHS_GENITIVE[idx],
            Locale::En => EN_MONTHS[idx],
        }
    }

    /// Timezone abbreviation suffix for the Moscow display zone.
    pub(crate) fn moscow_abbreviation(self) -> &'static str {
        match self {
            Locale::Ru => "МСК",
            Locale::En => "MSK",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Ru => write!(f, "ru"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = EpgDayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "ru" | "ru-ru" => Ok(Locale::Ru),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            _ => Err(EpgDayError::InvalidLocale(s.to_string())),
        }
    }
}

/// Format a date as day and month without year or weekday.
///
/// ```
/// use chrono::NaiveDate;
/// use epgday_core::locale::{Locale, format_day_month};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(format_day_month(date, Locale::Ru), "05 марта");
/// assert_eq!(format_day_month(date, Locale::En), "05 March");
/// ```
pub fn format_day_month(date: NaiveDate, locale: Locale) -> String {
    format!("{:02} {}", date.day(), locale.month_name(date.month()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_default_is_ru() {
        assert_eq!(Locale::default(), Locale::Ru);
    }

    #[test]
    fn locale_from_str_accepts_regional_tags() {
        assert_eq!(Locale::from_str("ru").unwrap(), Locale::Ru);
        assert_eq!(Locale::from_str("ru-RU").unwrap(), Locale::Ru);
        assert_eq!(Locale::from_str("en_US").unwrap(), Locale::En);
        assert_eq!(Locale::from_str(" EN ").unwrap(), Locale::En);
        assert!(matches!(
            Locale::from_str("de"),
            Err(EpgDayError::InvalidLocale(_))
        ));
    }

    #[test]
    fn unknown_locale_message_names_it_once() {
        let err = Locale::from_str("de").unwrap_err();
        assert_eq!(err.to_string(), "Invalid locale: 'de' (expected 'ru' or 'en')");
    }

    #[test]
    fn locale_display_round_trips() {
        for locale in [Locale::Ru, Locale::En] {
            assert_eq!(Locale::from_str(&locale.to_string()).unwrap(), locale);
        }
    }

    #[test]
    fn relative_words() {
        assert_eq!(Locale::Ru.today(), "Сегодня");
        assert_eq!(Locale::Ru.tomorrow(), "Завтра");
        assert_eq!(Locale::Ru.yesterday(), "Вчера");
        assert_eq!(Locale::Ru.no_date(), "Без даты");
        assert_eq!(Locale::En.no_date(), "No date");
    }

    #[test]
    fn day_month_has_no_year() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(format_day_month(date, Locale::Ru), "31 декабря");
        assert_eq!(format_day_month(date, Locale::En), "31 December");
    }

    #[test]
    fn month_name_clamps() {
        assert_eq!(Locale::En.month_name(0), "January");
        assert_eq!(Locale::En.month_name(13), "December");
    }

    #[test]
    fn locale_serialization() {
        assert_eq!(serde_json::to_string(&Locale::Ru).unwrap(), "\"ru\"");
        assert_eq!(
            serde_json::from_str::<Locale>("\"en\"").unwrap(),
            Locale::En
        );
    }
}
