//! Tenure breakdown model.

use serde::{Deserialize, Serialize};

use super::locale::TenureUnit;

/// Elapsed calendar time between a hire date and a reference date.
///
/// Years and months follow calendar arithmetic; the leftover days are
/// split into whole weeks and remaining days.
///
/// # Example
///
/// ```
/// use payroll_core::models::TenureBreakdown;
///
/// let breakdown = TenureBreakdown { years: 1, months: 0, weeks: 2, days: 3 };
/// assert!(!breakdown.is_zero());
/// assert_eq!(breakdown.non_zero_units().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TenureBreakdown {
    /// Whole calendar years.
    pub years: u32,
    /// Whole calendar months after the years.
    pub months: u32,
    /// Whole weeks after the months.
    pub weeks: u32,
    /// Remaining days after the weeks (0..=6).
    pub days: u32,
}

impl TenureBreakdown {
    /// Returns true when every unit is zero.
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.weeks == 0 && self.days == 0
    }

    /// Iterates over the non-zero units, largest first.
    pub fn non_zero_units(&self) -> impl Iterator<Item = (TenureUnit, u32)> {
        [
            (TenureUnit::Year, self.years),
            (TenureUnit::Month, self.months),
            (TenureUnit::Week, self.weeks),
            (TenureUnit::Day, self.days),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
    }
}
