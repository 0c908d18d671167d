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

/// Values given on the command line. They win over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub page_size: Option<usize>,
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/userdeck/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("userdeck").join("config.toml")
    }

    /// Loads configuration from `path` and applies `overrides` on top.
    ///
    /// - If the file doesn't exist, starts from `Config::default()`.
    /// - Validation runs once, after the overrides, so a command-line value
    ///   can repair a file value.
    pub fn load_from(path: &Path, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        Self::read_from(path)?.with_overrides(overrides)
    }

    /// Parses `path` as TOML without validating it.
    fn read_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply command-line overrides, then validate.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(endpoint) = overrides.endpoint {
            self.source.endpoint = endpoint;
        }
        if let Some(page_size) = overrides.page_size {
            self.view.page_size = page_size;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint is an http(s) URL
    /// - Timeouts are positive
    /// - Page size options are non-empty and positive
    /// - The initial page size is one of the options
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.source.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("Endpoint '{}' must be an http(s) URL", endpoint),
            });
        }

        if self.source.timeout_seconds == 0 || self.source.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        let options = &self.view.page_size_options;
        if options.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one page size option must be configured".to_string(),
            });
        }
        if options.contains(&0) {
            return Err(ConfigError::ValidationError {
                message: "Page size options must be positive".to_string(),
            });
        }

        if !options.contains(&self.view.page_size) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Page size {} is not one of {:?}",
                    self.view.page_size, options
                ),
            });
        }

        Ok(())
    }
}
