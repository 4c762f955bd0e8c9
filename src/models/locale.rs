//! Display locales for period labels and tenure strings.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A calendar unit used in tenure strings, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenureUnit {
    /// Calendar years.
    Year,
    /// Calendar months.
    Month,
    /// Seven-day weeks.
    Week,
    /// Days.
    Day,
}

/// The locale used to render labels.
///
/// Month names come from chrono's locale tables; unit words and the
/// "less than one day" sentinel are kept here.
///
/// # Example
///
/// ```
/// use payroll_core::models::Locale;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(Locale::Es.month_label(date), "enero 2025");
/// assert_eq!(Locale::En.month_label(date), "January 2025");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Spanish (Spain).
    #[default]
    Es,
    /// English (United States).
    En,
}

impl Locale {
    fn chrono_locale(self) -> chrono::Locale {
        match self {
            Locale::Es => chrono::Locale::es_ES,
            Locale::En => chrono::Locale::en_US,
        }
    }

    /// Formats the month and year of `date` as a long month name followed
    /// by the numeric year.
    pub fn month_label(self, date: NaiveDate) -> String {
        Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
            .format_localized("%B %Y", self.chrono_locale())
            .to_string()
    }

    /// Returns the word for `unit`, pluralized for `count`.
    pub fn unit_word(self, unit: TenureUnit, count: u32) -> &'static str {
        let plural = count != 1;
        match (self, unit, plural) {
            (Locale::Es, TenureUnit::Year, false) => "año",
            (Locale::Es, TenureUnit::Year, true) => "años",
            (Locale::Es, TenureUnit::Month, false) => "mes",
            (Locale::Es, TenureUnit::Month, true) => "meses",
            (Locale::Es, TenureUnit::Week, false) => "semana",
            (Locale::Es, TenureUnit::Week, true) => "semanas",
            (Locale::Es, TenureUnit::Day, false) => "día",
            (Locale::Es, TenureUnit::Day, true) => "días",
            (Locale::En, TenureUnit::Year, false) => "year",
            (Locale::En, TenureUnit::Year, true) => "years",
            (Locale::En, TenureUnit::Month, false) => "month",
            (Locale::En, TenureUnit::Month, true) => "months",
            (Locale::En, TenureUnit::Week, false) => "week",
            (Locale::En, TenureUnit::Week, true) => "weeks",
            (Locale::En, TenureUnit::Day, false) => "day",
            (Locale::En, TenureUnit::Day, true) => "days",
        }
    }

    /// Separator placed between rendered units.
    pub fn delimiter(self) -> &'static str {
        match self {
            Locale::Es => " ",
            Locale::En => ", ",
        }
    }

    /// The string shown when less than one whole day has elapsed.
    pub fn less_than_a_day(self) -> &'static str {
        match self {
            Locale::Es => "menos de un día",
            Locale::En => "less than a day",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_spanish_month_labels_are_lowercase() {
        assert_eq!(Locale::Es.month_label(date(2025, 1, 1)), "enero 2025");
        assert_eq!(Locale::Es.month_label(date(2024, 12, 1)), "diciembre 2024");
    }

    #[test]
    fn test_english_month_labels() {
        assert_eq!(Locale::En.month_label(date(2024, 2, 1)), "February 2024");
    }

    #[test]
    fn test_unit_words_pluralize() {
        assert_eq!(Locale::Es.unit_word(TenureUnit::Month, 1), "mes");
        assert_eq!(Locale::Es.unit_word(TenureUnit::Month, 2), "meses");
        assert_eq!(Locale::En.unit_word(TenureUnit::Day, 1), "day");
        assert_eq!(Locale::En.unit_word(TenureUnit::Day, 0), "days");
    }

    #[test]
    fn test_locale_serialization() {
        assert_eq!(serde_json::to_string(&Locale::Es).unwrap(), "\"es\"");
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
        assert_eq!(Locale::default(), Locale::Es);
    }
}
