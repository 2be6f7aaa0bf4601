use std::time::Duration;
use thiserror::Error;

use super::read::{PickledOnlyPolicy, UnknownPolicy};
use crate::config::PicklingConfig;
use crate::platform::{TargetPlatform, UnknownPlatform};

/// Upper bound on distinct pickled formats a single write may register.
pub const DEFAULT_MAX_PICKLED_FORMATS: usize = 100;

/// How long a user gesture keeps the transient-activation window open.
pub const DEFAULT_ACTIVATION_WINDOW: Duration = Duration::from_millis(5000);

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Platform(#[from] UnknownPlatform),

    #[error(transparent)]
    Policy(#[from] UnknownPolicy),
}

/// Resolved engine settings: `PicklingConfig` facts plus defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub platform: TargetPlatform,
    pub pickled_only_policy: PickledOnlyPolicy,
    pub max_pickled_formats: usize,
    pub activation_window: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            platform: TargetPlatform::current(),
            pickled_only_policy: PickledOnlyPolicy::default(),
            max_pickled_formats: DEFAULT_MAX_PICKLED_FORMATS,
            activation_window: DEFAULT_ACTIVATION_WINDOW,
        }
    }
}

impl EngineSettings {
    pub fn for_platform(platform: TargetPlatform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    /// Apply defaults to empty config facts and reject unknown names.
    pub fn from_config(config: &PicklingConfig) -> Result<Self, SettingsError> {
        let defaults = Self::default();

        let platform = match config.platform.trim() {
            "" => defaults.platform,
            name => name.parse::<TargetPlatform>()?,
        };

        let pickled_only_policy = match config.pickled_only_policy.trim() {
            "" => defaults.pickled_only_policy,
            name => name.parse::<PickledOnlyPolicy>()?,
        };

        let max_pickled_formats = match config.max_pickled_formats {
            0 => defaults.max_pickled_formats,
            n => usize::try_from(n).unwrap_or(usize::MAX),
        };

        let activation_window = match config.activation_window_ms {
            0 => defaults.activation_window,
            ms => Duration::from_millis(ms),
        };

        Ok(Self {
            platform,
            pickled_only_policy,
            max_pickled_formats,
            activation_window,
        })
    }
}
