//! Payroll period resolution.
//!
//! This module maps a month offset and a cutoff policy onto the calendar
//! month a payroll report should cover. Before the cutoff day the previous
//! month's cycle has not closed yet, so offset 0 still means last month.

use chrono::{Datelike, Local, Months, NaiveDate};
use tracing::debug;

use crate::config::{ConfigLoader, PeriodPolicy};
use crate::error::{CoreError, CoreResult};
use crate::models::{Locale, PayrollPeriod};

/// Returns the offset after applying the cutoff rule.
///
/// The comparison is inclusive: on the cutoff day itself the previous
/// month is still reported.
///
/// # Example
///
/// ```
/// use payroll_core::calculation::effective_months_ago;
/// use payroll_core::config::PeriodPolicy;
/// use chrono::NaiveDate;
///
/// let policy = PeriodPolicy::default();
/// let on_cutoff = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
/// let after_cutoff = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
///
/// assert_eq!(effective_months_ago(0, true, on_cutoff, policy), Some(1));
/// assert_eq!(effective_months_ago(0, true, after_cutoff, policy), Some(0));
/// assert_eq!(effective_months_ago(0, false, on_cutoff, policy), Some(0));
/// ```
pub fn effective_months_ago(
    months_ago: u32,
    apply_cutoff: bool,
    today: NaiveDate,
    policy: PeriodPolicy,
) -> Option<u32> {
    if apply_cutoff && today.day() <= policy.cutoff_day {
        months_ago.checked_add(1)
    } else {
        Some(months_ago)
    }
}

/// Resolves the payroll period `months_ago` months before `today`.
///
/// # Arguments
///
/// * `months_ago` - Offset in months from the current period
/// * `apply_cutoff` - Whether days up to the cutoff still report the previous month
/// * `today` - The reference date
/// * `policy` - The period policy holding the cutoff day
/// * `locale` - Locale for the period label
///
/// # Returns
///
/// The resolved [`PayrollPeriod`], or `PeriodOutOfRange` if the month lies
/// outside the range chrono can represent.
///
/// # Example
///
/// ```
/// use payroll_core::calculation::resolve_period;
/// use payroll_core::config::PeriodPolicy;
/// use payroll_core::models::Locale;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// let period = resolve_period(0, true, today, PeriodPolicy::default(), Locale::Es)?;
///
/// assert_eq!(period.start_date.to_string(), "2024-12-01");
/// assert_eq!(period.end_date.to_string(), "2024-12-31");
/// assert_eq!(period.label, "diciembre 2024");
/// # Ok::<(), payroll_core::error::CoreError>(())
/// ```
pub fn resolve_period(
    months_ago: u32,
    apply_cutoff: bool,
    today: NaiveDate,
    policy: PeriodPolicy,
    locale: Locale,
) -> CoreResult<PayrollPeriod> {
    let out_of_range = || CoreError::PeriodOutOfRange { months_ago, today };

    let effective = effective_months_ago(months_ago, apply_cutoff, today, policy)
        .ok_or_else(out_of_range)?;

    let start_date = today
        .with_day(1)
        .and_then(|first| first.checked_sub_months(Months::new(effective)))
        .ok_or_else(out_of_range)?;
    let end_date = start_date
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(out_of_range)?;

    let period = PayrollPeriod {
        start_date,
        end_date,
        label: locale.month_label(start_date),
    };

    debug!(
        months_ago,
        apply_cutoff,
        effective_months_ago = effective,
        %today,
        start_date = %period.start_date,
        end_date = %period.end_date,
        "Resolved payroll period"
    );

    Ok(period)
}

/// Resolves `count` consecutive periods, newest first, starting at offset 0.
///
/// # Example
///
/// ```
/// use payroll_core::calculation::recent_periods;
/// use payroll_core::config::PeriodPolicy;
/// use payroll_core::models::Locale;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
/// let periods = recent_periods(3, true, today, PeriodPolicy::default(), Locale::En)?;
///
/// let labels: Vec<_> = periods.iter().map(|p| p.label.as_str()).collect();
/// assert_eq!(labels, ["February 2025", "January 2025", "December 2024"]);
/// # Ok::<(), payroll_core::error::CoreError>(())
/// ```
pub fn recent_periods(
    count: u32,
    apply_cutoff: bool,
    today: NaiveDate,
    policy: PeriodPolicy,
    locale: Locale,
) -> CoreResult<Vec<PayrollPeriod>> {
    (0..count)
        .map(|months_ago| resolve_period(months_ago, apply_cutoff, today, policy, locale))
        .collect()
}

/// Resolves a period against the local clock using the loaded policy.
pub fn resolve_period_now(
    months_ago: u32,
    apply_cutoff: bool,
    config: &ConfigLoader,
) -> CoreResult<PayrollPeriod> {
    resolve_period(
        months_ago,
        apply_cutoff,
        Local::now().date_naive(),
        config.period(),
        config.locale(),
    )
}
