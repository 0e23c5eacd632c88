use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/petreels/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("petreels").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - A missing file yields `Config::default()`.
    /// - Otherwise the file is parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.autoplay_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "carousel.autoplay_interval_ms must be greater than 0".to_string(),
            });
        }

        let threshold = self.carousel.visibility_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "carousel.visibility_threshold must be within 0.0..=1.0, got {}",
                    threshold
                ),
            });
        }

        if self.carousel.swipe_threshold == 0 {
            return Err(ConfigError::ValidationError {
                message: "carousel.swipe_threshold must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Reduced motion as the host sees it: the environment override or the
    /// configured preference.
    pub fn prefers_reduced_motion(&self) -> bool {
        crate::motion::env_prefers_reduced_motion() || self.display.reduced_motion
    }
}
