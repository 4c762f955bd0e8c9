//! Payroll period model.
//!
//! This module contains the [`PayrollPeriod`] type returned by the period
//! resolver and consumed by report and filter queries.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A payroll period covering one calendar month.
///
/// `start_date` is the first day of the month and `end_date` the last.
/// They serialize as `startDate`/`endDate` in `YYYY-MM-DD` form, which
/// downstream filters parse as a date-only key.
///
/// # Example
///
/// ```
/// use payroll_core::models::PayrollPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayrollPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
///     label: "enero 2025".to_string(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()));
/// assert_eq!(period.end_of_day().to_string(), "2025-01-31 23:59:59");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollPeriod {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
    /// Localized "Month Year" label.
    pub label: String,
}

impl PayrollPeriod {
    /// Checks if a given date falls within this period, inclusive of both
    /// ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The last second of the period, `end_date` at 23:59:59.
    pub fn end_of_day(&self) -> NaiveDateTime {
        self.end_date.and_time(NaiveTime::default()) + Duration::seconds(86_399)
    }

    /// Number of calendar days covered by the period.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn february_2024() -> PayrollPeriod {
        PayrollPeriod {
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            label: "febrero 2024".to_string(),
        }
    }

    #[test]
    fn test_contains_date_on_bounds() {
        let period = february_2024();
        assert!(period.contains_date(period.start_date));
        assert!(period.contains_date(period.end_date));
    }

    #[test]
    fn test_contains_date_outside_period() {
        let period = february_2024();
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    }

    #[test]
    fn test_end_of_day_is_last_second() {
        let period = february_2024();
        let expected = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(period.end_of_day(), expected);
    }

    #[test]
    fn test_days_counts_leap_february() {
        assert_eq!(february_2024().days(), 29);
    }

    #[test]
    fn test_serialize_uses_date_only_keys() {
        let json = serde_json::to_string(&february_2024()).unwrap();
        assert!(json.contains("\"startDate\":\"2024-02-01\""));
        assert!(json.contains("\"endDate\":\"2024-02-29\""));
        assert!(json.contains("\"label\":\"febrero 2024\""));
    }

    #[test]
    fn test_serialize_has_no_snake_case_keys() {
        let json = serde_json::to_value(february_2024()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 3);
        assert!(keys.contains(&"startDate"));
        assert!(keys.contains(&"endDate"));
        assert!(keys.contains(&"label"));
    }

    #[test]
    fn test_deserialize_payroll_period() {
        let json = r#"{
            "startDate": "2025-01-01",
            "endDate": "2025-01-31",
            "label": "enero 2025"
        }"#;
        let period: PayrollPeriod = serde_json::from_str(json).unwrap();
        assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(period.label, "enero 2025");
    }
}
