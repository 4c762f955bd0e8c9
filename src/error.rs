//! Error types for the payroll core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving periods,
//! formatting tenure, or loading policy configuration.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll core.
///
/// # Example
///
/// ```
/// use payroll_core::error::CoreError;
///
/// let error = CoreError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A policy value was outside its permitted range.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A date string could not be parsed.
    #[error("Invalid date '{input}': {message}")]
    InvalidDate {
        /// The raw input.
        input: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A hire date lies after the reference date.
    #[error("Hire date {hire_date} is after {today}")]
    HireDateInFuture {
        /// The hire date that was supplied.
        hire_date: NaiveDate,
        /// The reference date the tenure was measured against.
        today: NaiveDate,
    },

    /// A month offset resolved to a month chrono cannot represent.
    #[error("Cannot resolve a period {months_ago} months before {today}")]
    PeriodOutOfRange {
        /// The requested offset.
        months_ago: u32,
        /// The reference date.
        today: NaiveDate,
    },
}

/// A type alias for Results that return CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
