//! Registry configuration.

use super::key::DEFAULT_KEY_SEPARATOR;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a [`GameRegistry`](crate::GameRegistry).
///
/// ```toml
/// key_separator = "$$"
/// clear_finished_games = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct RegistryConfig {
    /// Separator placed between the two user ids of a pair key.
    #[serde(default = "default_key_separator")]
    key_separator: String,

    /// Remove a game from the registry as soon as a move ends it.
    #[serde(default = "default_clear_finished_games")]
    clear_finished_games: bool,
}

fn default_key_separator() -> String {
    DEFAULT_KEY_SEPARATOR.to_string()
}

fn default_clear_finished_games() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            key_separator: default_key_separator(),
            clear_finished_games: default_clear_finished_games(),
        }
    }
}

impl RegistryConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            key_separator = %config.key_separator,
            clear_finished_games = config.clear_finished_games,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key_separator.is_empty() {
            return Err(ConfigError::new("key_separator must not be empty"));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
