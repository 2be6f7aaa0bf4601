//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No validation logic
//! - No default value calculation
//!
//! Empty strings and zeros are facts meaning "not configured".
//! [`crate::pickling::EngineSettings::from_config`] turns them into defaults.

use std::path::PathBuf;

/// Engine configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PicklingConfig {
    /// Platform name override; empty means the compile target
    pub platform: String,

    /// `hide` / `expose`; empty means the default policy
    pub pickled_only_policy: String,

    /// Distinct pickled formats allowed per write; 0 means the default
    pub max_pickled_formats: u64,

    /// Transient-activation lifetime in milliseconds; 0 means the default
    pub activation_window_ms: u64,

    /// Log level directive (e.g. `debug`); empty means environment default
    pub log_level: String,

    /// Directory for log files; empty disables file logging
    pub log_directory: PathBuf,
}

impl PicklingConfig {
    /// Create PicklingConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Missing keys are empty facts.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let u64_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64
        };

        Ok(Self {
            platform: str_at("engine", "platform"),
            pickled_only_policy: str_at("engine", "pickled_only_policy"),
            max_pickled_formats: u64_at("engine", "max_pickled_formats"),
            activation_window_ms: u64_at("activation", "window_ms"),
            log_level: str_at("logging", "level"),
            log_directory: PathBuf::from(str_at("logging", "directory")),
        })
    }

    /// Create empty PicklingConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            platform: String::new(),
            pickled_only_policy: String::new(),
            max_pickled_formats: 0,
            activation_window_ms: 0,
            log_level: String::new(),
            log_directory: PathBuf::new(),
        }
    }
}
