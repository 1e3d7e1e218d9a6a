//! Configuration management module
//!
//! Handles loading, saving, and validation of the learner's app
//! configuration: display name, chosen language and proficiency, and
//! whether onboarding has been completed.

use crate::content::catalog;
use crate::{LingAfriqError, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub mod persistence;

/// App configuration persisted between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display name shown on the dashboard
    pub user_name: String,
    /// Catalog id of the chosen language, once one is picked
    pub language_id: Option<String>,
    /// Id of the chosen proficiency level, once one is picked
    pub proficiency: Option<String>,
    /// Set after the learner has been through onboarding once
    pub skip_onboarding: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_name: "Kwame".to_string(),
            language_id: None,
            proficiency: None,
            skip_onboarding: false,
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name
    pub fn with_user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = name.into();
        self
    }

    /// Set the chosen language
    pub fn with_language(mut self, language_id: impl Into<String>) -> Self {
        self.language_id = Some(language_id.into());
        self
    }

    /// Set the chosen proficiency level
    pub fn with_proficiency(mut self, proficiency: impl Into<String>) -> Self {
        self.proficiency = Some(proficiency.into());
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.user_name.trim().is_empty() {
            return Err(LingAfriqError::ConfigError(
                "User name must not be empty".to_string(),
            ));
        }

        if let Some(id) = &self.language_id {
            if catalog::find(id).is_none() {
                return Err(LingAfriqError::ConfigError(format!(
                    "Unknown language id: {}",
                    id
                )));
            }
        }

        if let Some(level) = &self.proficiency {
            if catalog::find_level(level).is_none() {
                return Err(LingAfriqError::ConfigError(format!(
                    "Unknown proficiency level: {}",
                    level
                )));
            }
        }

        Ok(())
    }

    /// The chosen language resolved against the catalog, if any
    pub fn language(&self) -> Option<&'static catalog::Language> {
        self.language_id.as_deref().and_then(catalog::find)
    }

    /// Load configuration from the standard config file location.
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            LingAfriqError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            LingAfriqError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LingAfriqError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            LingAfriqError::ConfigError(format!("Failed to serialize configuration: {}", e))
        })?;

        fs::write(&config_path, content).map_err(|e| {
            LingAfriqError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/lingafriq/lingafriq.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            LingAfriqError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.skip_onboarding);
        assert!(config.language().is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = AppConfig::new()
            .with_user_name("Asha")
            .with_language("swahili")
            .with_proficiency("beginner");
        assert!(config.validate().is_ok());
        assert_eq!(config.language().unwrap().name, "Swahili");
    }

    #[test]
    fn test_validate_rejects_empty_user_name() {
        let config = AppConfig::new().with_user_name("   ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_language() {
        let config = AppConfig::new().with_language("klingon");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_proficiency() {
        let config = AppConfig::new().with_proficiency("wizard");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::new()
            .with_language("zulu")
            .with_proficiency("expert");
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let back: AppConfig = toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, back);
    }

    #[test]
    fn test_config_file_path() {
        let path = AppConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("lingafriq"));
        assert!(path.to_string_lossy().contains("lingafriq.toml"));
    }
}
