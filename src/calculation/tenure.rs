//! Tenure calculation and formatting.
//!
//! Elapsed time since a hire date is broken down using calendar arithmetic:
//! a month is the distance between the same day in consecutive months, not
//! a fixed block of days.

use chrono::{DateTime, Datelike, Local, Months, NaiveDate, NaiveDateTime};

use crate::error::{CoreError, CoreResult};
use crate::models::{Locale, TenureBreakdown};

/// Breaks down the time between `hire_date` and `today`.
///
/// When the hire day does not exist in the anchor month (e.g. the 31st),
/// the anchor is clamped to that month's last day, so the last day of a
/// shorter month completes the month.
///
/// # Errors
///
/// Returns `HireDateInFuture` if `hire_date` is after `today`.
///
/// # Example
///
/// ```
/// use payroll_core::calculation::tenure_breakdown;
/// use payroll_core::models::TenureBreakdown;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2022, 1, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 3, 22).unwrap();
///
/// assert_eq!(
///     tenure_breakdown(hired, today)?,
///     TenureBreakdown { years: 3, months: 2, weeks: 1, days: 5 }
/// );
/// # Ok::<(), payroll_core::error::CoreError>(())
/// ```
pub fn tenure_breakdown(hire_date: NaiveDate, today: NaiveDate) -> CoreResult<TenureBreakdown> {
    if hire_date > today {
        return Err(CoreError::HireDateInFuture { hire_date, today });
    }

    let mut total_months = (today.year() - hire_date.year()) * 12 + today.month() as i32
        - hire_date.month() as i32;
    if today.day() < hire_date.day() && !is_last_day_of_month(today) {
        total_months -= 1;
    }
    // hire_date <= today keeps this non-negative.
    let total_months = total_months.max(0) as u32;

    let anchor = hire_date
        .checked_add_months(Months::new(total_months))
        .ok_or_else(|| CoreError::InvalidDate {
            input: hire_date.to_string(),
            message: "tenure exceeds the supported calendar range".to_string(),
        })?;
    let remaining_days = (today - anchor).num_days().max(0) as u32;

    Ok(TenureBreakdown {
        years: total_months / 12,
        months: total_months % 12,
        weeks: remaining_days / 7,
        days: remaining_days % 7,
    })
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt().is_none_or(|next| next.month() != date.month())
}

/// Formats the tenure between `hire_date` and `today` for display.
///
/// Non-zero units are rendered largest first. When nothing has elapsed
/// the locale's "less than one day" string is returned.
///
/// # Example
///
/// ```
/// use payroll_core::calculation::format_tenure;
/// use payroll_core::models::Locale;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let hired = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
///
/// assert_eq!(format_tenure(hired, today, Locale::Es)?, "2 años");
/// assert_eq!(format_tenure(today, today, Locale::Es)?, "menos de un día");
/// # Ok::<(), payroll_core::error::CoreError>(())
/// ```
pub fn format_tenure(hire_date: NaiveDate, today: NaiveDate, locale: Locale) -> CoreResult<String> {
    let breakdown = tenure_breakdown(hire_date, today)?;
    Ok(render_breakdown(&breakdown, locale))
}

/// Formats tenure against the local clock.
pub fn format_tenure_now(hire_date: NaiveDate, locale: Locale) -> CoreResult<String> {
    format_tenure(hire_date, Local::now().date_naive(), locale)
}

/// Renders a breakdown in the given locale.
pub fn render_breakdown(breakdown: &TenureBreakdown, locale: Locale) -> String {
    if breakdown.is_zero() {
        return locale.less_than_a_day().to_string();
    }

    breakdown
        .non_zero_units()
        .map(|(unit, count)| format!("{} {}", count, locale.unit_word(unit, count)))
        .collect::<Vec<_>>()
        .join(locale.delimiter())
}

/// Parses a hire date from `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`, or an
/// RFC 3339 timestamp. Timestamps keep their own calendar date.
///
/// # Example
///
/// ```
/// use payroll_core::calculation::parse_hire_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2021, 9, 1).unwrap();
/// assert_eq!(parse_hire_date("2021-09-01")?, expected);
/// assert_eq!(parse_hire_date("2021-09-01T08:30:00-03:00")?, expected);
/// # Ok::<(), payroll_core::error::CoreError>(())
/// ```
pub fn parse_hire_date(input: &str) -> CoreResult<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(datetime.date());
    }

    DateTime::parse_from_rfc3339(input)
        .map(|datetime| datetime.date_naive())
        .map_err(|e| CoreError::InvalidDate {
            input: input.to_string(),
            message: e.to_string(),
        })
}
