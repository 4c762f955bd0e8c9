//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the policy
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::models::Locale;

use super::types::{PeriodPolicy, PolicyConfig, RetryPolicy};

/// Loads, validates and provides access to the policy configuration.
///
/// # File Format
///
/// ```yaml
/// period:
///   cutoff_day: 15
/// retry:
///   max_retries: 3
/// locale: es
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_core::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/policy.yaml").unwrap();
/// println!("Cutoff day: {}", loader.period().cutoff_day);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or
    /// holds a value outside its permitted range.
    pub fn load<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CoreError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        debug!(
            path = %path_str,
            cutoff_day = loader.config.period.cutoff_day,
            max_retries = loader.config.retry.max_retries,
            "Loaded policy configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_core::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("period:\n  cutoff_day: 20\n")?;
    /// assert_eq!(loader.period().cutoff_day, 20);
    /// # Ok::<(), payroll_core::error::CoreError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> CoreResult<Self> {
        Self::parse(content, "<inline>")
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: PolicyConfig) -> CoreResult<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    fn parse(content: &str, origin: &str) -> CoreResult<Self> {
        let is_blank = content.lines().all(|line| {
            let line = line.trim();
            line.is_empty() || line.starts_with('#')
        });
        if is_blank {
            return Self::from_config(PolicyConfig::default());
        }

        let config: PolicyConfig =
            serde_yaml::from_str(content).map_err(|e| CoreError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the payroll period policy.
    pub fn period(&self) -> PeriodPolicy {
        self.config.period
    }

    /// Returns the retry policy.
    pub fn retry(&self) -> RetryPolicy {
        self.config.retry
    }

    /// Returns the display locale.
    pub fn locale(&self) -> Locale {
        self.config.locale
    }
}

fn validate(config: &PolicyConfig) -> CoreResult<()> {
    if !(1..=31).contains(&config.period.cutoff_day) {
        return Err(CoreError::InvalidPolicy {
            field: "period.cutoff_day".to_string(),
            message: format!("must be between 1 and 31, got {}", config.period.cutoff_day),
        });
    }
    Ok(())
}
