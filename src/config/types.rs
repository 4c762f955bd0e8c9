//! Configuration types for period and retry policies.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML policy file. Every section is optional
//! in the file and falls back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::models::Locale;

/// The day-of-month up to which the previous month is still reported.
pub const DEFAULT_CUTOFF_DAY: u32 = 15;

/// Retries allowed for read requests after the first failure.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Payroll period policy.
///
/// # Example
///
/// ```
/// use payroll_core::config::{PeriodPolicy, DEFAULT_CUTOFF_DAY};
///
/// assert_eq!(PeriodPolicy::default().cutoff_day, DEFAULT_CUTOFF_DAY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodPolicy {
    /// Days of the month on or before this value still belong to the
    /// previous payroll period.
    #[serde(default = "default_cutoff_day")]
    pub cutoff_day: u32,
}

impl PeriodPolicy {
    /// Creates a policy with the given cutoff day.
    pub fn with_cutoff_day(cutoff_day: u32) -> Self {
        Self { cutoff_day }
    }
}

impl Default for PeriodPolicy {
    fn default() -> Self {
        Self {
            cutoff_day: DEFAULT_CUTOFF_DAY,
        }
    }
}

/// Retry budget for failed read requests.
///
/// Writes are never retried and have no budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first failed attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// The complete policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Payroll period policy.
    #[serde(default)]
    pub period: PeriodPolicy,
    /// Retry policy for the request layer.
    #[serde(default)]
    pub retry: RetryPolicy,
    /// Display locale for labels.
    #[serde(default)]
    pub locale: Locale,
}

fn default_cutoff_day() -> u32 {
    DEFAULT_CUTOFF_DAY
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}
