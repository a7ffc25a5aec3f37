//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine's
//! configuration from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};

use super::types::{EngineSettings, WorkRules, WorkingDaysConfig, WorklogConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/standard/
/// ├── settings.yaml      # Instance name, version and timezone label
/// ├── work_rules.yaml    # Standard hours per day, report wrap width
/// └── working_days.yaml  # Fallback working days per month
/// ```
///
/// # Example
///
/// ```no_run
/// use worklog_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("Standard day: {} hours", loader.standard_hours_per_day());
/// println!("April working days: {:?}", loader.default_working_days().get(&4));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: WorklogConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/standard")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A value is out of range (month outside 1-12, non-positive hours,
    ///   zero wrap width)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use worklog_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/standard")?;
    /// # Ok::<(), worklog_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration");

        let settings = Self::load_yaml::<EngineSettings>(&path.join("settings.yaml"))?;

        let rules_path = path.join("work_rules.yaml");
        let work_rules = Self::load_yaml::<WorkRules>(&rules_path)?;
        validate_work_rules(&work_rules, &rules_path.display().to_string())?;

        let days_path = path.join("working_days.yaml");
        let working_days = Self::load_yaml::<WorkingDaysConfig>(&days_path)?;
        validate_working_days(
            &working_days.default_working_days,
            &days_path.display().to_string(),
        )?;

        info!(
            name = %settings.name,
            version = %settings.version,
            standard_hours_per_day = %work_rules.standard_hours_per_day,
            months_configured = working_days.default_working_days.len(),
            "Configuration loaded"
        );

        Ok(Self {
            config: WorklogConfig::new(settings, work_rules, working_days),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &WorklogConfig {
        &self.config
    }

    /// Returns the deployment settings.
    pub fn settings(&self) -> &EngineSettings {
        self.config.settings()
    }

    /// Hours counted for one working day.
    pub fn standard_hours_per_day(&self) -> Decimal {
        self.config.work_rules().standard_hours_per_day
    }

    /// Column limit for weekly report wrapping.
    pub fn report_wrap_columns(&self) -> usize {
        self.config.work_rules().report_wrap_columns
    }

    /// Fallback working days per calendar month.
    pub fn default_working_days(&self) -> &BTreeMap<u32, u32> {
        self.config.default_working_days()
    }
}

fn validate_work_rules(rules: &WorkRules, path: &str) -> EngineResult<()> {
    if rules.standard_hours_per_day <= Decimal::ZERO {
        return Err(EngineError::ConfigParseError {
            path: path.to_string(),
            message: format!(
                "standard_hours_per_day must be positive, got {}",
                rules.standard_hours_per_day
            ),
        });
    }
    if rules.report_wrap_columns == 0 {
        return Err(EngineError::ConfigParseError {
            path: path.to_string(),
            message: "report_wrap_columns must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_working_days(days: &BTreeMap<u32, u32>, path: &str) -> EngineResult<()> {
    for (&month, &count) in days {
        if !(1..=12).contains(&month) {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!("invalid month {} in default_working_days", month),
            });
        }
        if count > 31 {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!("month {} has {} working days", month, count),
            });
        }
    }
    Ok(())
}
