//! Payroll core for the employee-administration front end.
//!
//! This crate resolves payroll periods under a cutoff-day policy, formats
//! employee tenure, and classifies failed requests for retry. The
//! computations are pure; the [`api`] module exposes them over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
