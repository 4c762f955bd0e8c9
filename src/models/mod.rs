//! Core data models for the payroll core.
//!
//! This module contains all the domain models used throughout the crate.

mod locale;
mod payroll_period;
mod request_error;
mod tenure;

pub use locale::{Locale, TenureUnit};
pub use payroll_period::PayrollPeriod;
pub use request_error::{RequestError, RequestKind};
pub use tenure::TenureBreakdown;
