//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - Read TOML configuration files
//! - Parse TOML into the [`PicklingConfig`] DTO
//! - Report I/O and parsing errors with context
//!
//! ## Prohibited
//!
//! No validation and no default values. Unknown platform names and zero
//! limits are accepted here; `EngineSettings::from_config` decides what they
//! mean.

use anyhow::Context;
use std::path::Path;

use pb_core::config::PicklingConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<PicklingConfig> {
    let config_path = config_path.as_ref();
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    PicklingConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
                [engine]
                platform = "windows"
                pickled_only_policy = "expose"

                [activation]
                window_ms = 250
                "#,
            )
            .unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.platform, "windows");
        assert_eq!(config.pickled_only_policy, "expose");
        assert_eq!(config.activation_window_ms, 250);
        assert_eq!(config.max_pickled_formats, 0);
    }

    #[test]
    fn test_load_config_accepts_unknown_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[engine]\nplatform = \"amiga\"\npickled_only_policy = \"shout\"\n")
            .unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.platform, "amiga");
        assert_eq!(config.pickled_only_policy, "shout");
    }

    #[test]
    fn test_load_config_returns_error_on_missing_file() {
        let err = load_config("/nonexistent/pickleboard.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_returns_error_on_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[engine\nplatform = ").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }
}
