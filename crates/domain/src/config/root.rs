use serde::{Deserialize, Serialize};
use std::path::Path;

use super::decoder::DecoderConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

/// Main configuration structure for the A-reply parser
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Message decoder strictness
    #[serde(default)]
    pub decoder: DecoderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a specific file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.display().to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LoggingConfig::is_known_level(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }
}
