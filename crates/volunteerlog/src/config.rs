//! Configuration management for volunteerlog.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hours::OvernightPolicy;
use crate::storage::RecordStore;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration directory name.
const CONFIG_DIR_NAME: &str = "volunteerlog";

/// Environment variable prefix.
const ENV_PREFIX: &str = "VOLUNTEERLOG_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `VOLUNTEERLOG_`, sections split on `__`)
/// 2. TOML config file at `~/.config/volunteerlog/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Organization configuration.
    pub organization: OrganizationConfig,
    /// Hour logging configuration.
    pub hours: HoursConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// Organization running the volunteer program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    /// Name shown when thanking volunteers.
    pub name: String,
}

/// Hour logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoursConfig {
    /// What to do when a shift ends before it starts.
    pub overnight: OvernightPolicy,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Save the log after every successful change.
    pub auto_save: bool,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            name: "Lopez Urban Farm".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { auto_save: true }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing, or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.organization.name.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "organization.name must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Build an empty record store using these settings.
    #[must_use]
    pub fn record_store(&self) -> RecordStore {
        RecordStore::with_policy(self.hours.overnight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.organization.name, "Lopez Urban Farm");
        assert_eq!(config.hours.overnight, OvernightPolicy::Reject);
        assert!(config.storage.auto_save);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_organization() {
        let mut config = Config::default();
        config.organization.name = "   ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("organization.name"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("volunteerlog"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[organization]\nname = \"Eastside Pantry\"\n\n[hours]\novernight = \"wrap_midnight\"\n\n[storage]\nauto_save = false\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.organization.name, "Eastside Pantry");
        assert_eq!(config.hours.overnight, OvernightPolicy::WrapMidnight);
        assert!(!config.storage.auto_save);
    }

    #[test]
    fn test_load_rejects_unknown_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[hours]\novernight = \"sometimes\"\n").unwrap();

        let err = Config::load_from(Some(path)).unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)));
    }

    #[test]
    fn test_load_rejects_empty_organization() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[organization]\nname = \"\"\n").unwrap();

        let err = Config::load_from(Some(path)).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { .. }));
    }

    #[test]
    fn test_record_store_uses_policy() {
        let mut config = Config::default();
        config.hours.overnight = OvernightPolicy::Zero;

        let store = config.record_store();
        assert!(store.is_empty());
        assert_eq!(store.overnight_policy(), OvernightPolicy::Zero);
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("\"overnight\":\"reject\""));
        assert!(json.contains("auto_save"));
    }
}
