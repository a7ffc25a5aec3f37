//! Configuration loading for the worklog engine.
//!
//! This module loads the working rules (standard hours per day, report wrap
//! width) and the fallback working-days table from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use worklog_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded: {}", config.settings().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineSettings, WorkRules, WorkingDaysConfig, WorklogConfig};
