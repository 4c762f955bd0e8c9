//! Calculation logic for the payroll core.
//!
//! This module contains the payroll period resolver, the tenure formatter,
//! and the retry classifier used by the request layer. All functions are
//! pure; the reference date is always passed in, with `*_now` wrappers
//! reading the local clock.

mod period;
mod retry;
mod tenure;

pub use period::{effective_months_ago, recent_periods, resolve_period, resolve_period_now};
pub use retry::{RetryDecision, RetryState, decide_retry, should_retry};
pub use tenure::{
    format_tenure, format_tenure_now, parse_hire_date, render_breakdown, tenure_breakdown,
};
