//! Configuration management for subseqfind
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.subseqfind/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::budget::BudgetConfig;
use crate::cli::args::Verbosity;
use crate::errors::{Result, SearchError};

/// Complete configuration for subseqfind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: BudgetConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Telemetry display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub default_verbosity: String,
    pub color_output: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            default_verbosity: "normal".to_string(),
            color_output: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SearchError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| SearchError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard configuration location, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".subseqfind").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.max_evaluations <= 0 {
            return Err(SearchError::ConfigError(
                "max_evaluations must be greater than 0".to_string(),
            ));
        }

        if self.verbosity().is_none() {
            return Err(SearchError::ConfigError(format!(
                "Invalid verbosity level: {}",
                self.telemetry.default_verbosity
            )));
        }

        Ok(())
    }

    /// Configured default verbosity
    pub fn verbosity(&self) -> Option<Verbosity> {
        Verbosity::from_config_str(&self.telemetry.default_verbosity)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| SearchError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SearchError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| SearchError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Render as TOML for display
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SearchError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}
