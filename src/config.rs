//! Configuration management for studykit
//!
//! TOML-based configuration with defaults and validation.
//! Location: ~/.studykit/config.toml

use crate::errors::{Result, UtilError};
use crate::format::{Locale, DEFAULT_ELLIPSIS};
use crate::ids::DEFAULT_ID_LENGTH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Longest id the CLI will generate
pub const MAX_ID_LENGTH: usize = 64;

/// Complete configuration for studykit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ids: IdsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Date and text rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub locale: Locale,
    pub ellipsis: String,
}

/// Client-side id generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdsConfig {
    pub length: usize,
}

/// Log output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

impl Default for IdsConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_ID_LENGTH,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Self::load_default(),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            UtilError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| UtilError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from the standard location, or built-in defaults when absent
    pub fn load_default() -> Result<Self> {
        match Self::config_path() {
            Some(config_path) if config_path.exists() => Self::load_from_file(&config_path),
            _ => Ok(Config::default()),
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| UtilError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Standard configuration file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".studykit").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ids.length == 0 || self.ids.length > MAX_ID_LENGTH {
            return Err(UtilError::ConfigError(format!(
                "ids.length must be between 1 and {}",
                MAX_ID_LENGTH
            )));
        }

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            return Err(UtilError::ConfigError(format!(
                "logging.level '{}' is not a log level",
                self.logging.level
            )));
        }

        Ok(())
    }
}
