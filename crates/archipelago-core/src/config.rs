//! Configuration loading and typed config structures for the Archipelago game.
//!
//! The optional configuration lives in `archipelago-config.yaml`. This module
//! defines strongly-typed structs that mirror the YAML structure and a loader
//! that reads and validates the file. Every field has a default, so an empty
//! or missing file yields a playable game.
//!
//! Only presentation and logging are configurable. Tick timing, decay rates,
//! and activity effects are fixed in [`crate::rules`] and
//! [`crate::activity`].

use std::path::Path;

use serde::Deserialize;

use crate::onboarding::{AvatarRoster, DEFAULT_AVATARS};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "archipelago-config.yaml";

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "ARCHIPELAGO_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The file parsed but a value is unusable.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
///
/// Mirrors the structure of `archipelago-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Presentation settings.
    #[serde(default)]
    pub game: GameSection,

    /// Avatar roster.
    #[serde(default)]
    pub avatars: AvatarConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for logging:
    /// - `ARCHIPELAGO_LOG_LEVEL` overrides `logging.level`
    /// - `ARCHIPELAGO_LOG_FORMAT` overrides `logging.format`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value fails validation.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, applying environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value fails validation.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_without_env(yaml)?;
        config.logging.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string without consulting the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value fails validation.
    pub fn parse_without_env(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.avatars.images.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "avatars.images must list at least one image".to_owned(),
            });
        }
        if self.game.title.trim().is_empty() {
            return Err(ConfigError::Invalid {
                reason: "game.title must not be empty".to_owned(),
            });
        }
        Ok(())
    }

    /// Build the avatar roster described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the roster is empty.
    pub fn roster(&self) -> Result<AvatarRoster, ConfigError> {
        AvatarRoster::new(self.avatars.images.clone()).map_err(|e| ConfigError::Invalid {
            reason: e.to_string(),
        })
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameSection {
    /// Title shown on the onboarding and playing screens.
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Avatar roster configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AvatarConfig {
    /// Image paths, in cycling order.
    #[serde(default = "default_avatar_images")]
    pub images: Vec<String>,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            images: default_avatar_images(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human-readable events.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse a format name, ignoring ASCII case.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error). `RUST_LOG` wins
    /// over this value when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Override logging settings with environment variables when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override logging settings from an arbitrary key lookup.
    ///
    /// Unrecognised format names are ignored and the configured format is
    /// kept.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup("ARCHIPELAGO_LOG_LEVEL") {
            self.level = level;
        }
        if let Some(format) = lookup("ARCHIPELAGO_LOG_FORMAT").as_deref().and_then(LogFormat::parse)
        {
            self.format = format;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

fn default_title() -> String {
    "UMN - Ucup Exploring the Archipelago".to_owned()
}

fn default_avatar_images() -> Vec<String> {
    DEFAULT_AVATARS.iter().map(|s| (*s).to_owned()).collect()
}

fn default_log_level() -> String {
    "info".to_owned()
}
