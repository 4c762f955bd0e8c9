//! Policy configuration for the payroll core.
//!
//! This module provides functionality to load the period and retry
//! policies from a YAML file, falling back to built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use payroll_core::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/policy.yaml").unwrap();
//! println!("Cutoff day: {}", config.period().cutoff_day);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_CUTOFF_DAY, DEFAULT_MAX_RETRIES, PeriodPolicy, PolicyConfig, RetryPolicy,
};
