//! Configuration types for the worklog engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Identifying information about the deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Display name of the engine instance.
    pub name: String,
    /// Version label of the configuration set.
    pub version: String,
    /// Timezone label clock times are recorded in (informational only).
    pub timezone: String,
}

/// Working rules from work_rules.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkRules {
    /// Hours counted for one working day.
    pub standard_hours_per_day: Decimal,
    /// Column limit used when wrapping weekly reports.
    pub report_wrap_columns: usize,
}

/// Working days configuration from working_days.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkingDaysConfig {
    /// Fallback working days per calendar month.
    pub default_working_days: BTreeMap<u32, u32>,
}

/// The complete configuration loaded from a directory.
#[derive(Debug, Clone)]
pub struct WorklogConfig {
    settings: EngineSettings,
    work_rules: WorkRules,
    working_days: WorkingDaysConfig,
}

impl WorklogConfig {
    /// Creates a new WorklogConfig from its component parts.
    pub fn new(
        settings: EngineSettings,
        work_rules: WorkRules,
        working_days: WorkingDaysConfig,
    ) -> Self {
        Self {
            settings,
            work_rules,
            working_days,
        }
    }

    /// Returns the deployment settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the working rules.
    pub fn work_rules(&self) -> &WorkRules {
        &self.work_rules
    }

    /// Returns the fallback working days per month.
    pub fn default_working_days(&self) -> &BTreeMap<u32, u32> {
        &self.working_days.default_working_days
    }
}
