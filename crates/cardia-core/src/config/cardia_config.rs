//! Top-level Cardia configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClientConfig, ObservabilityConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CARDIA_*`)
/// 2. Config file (`cardia.toml` or an explicit path)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CardiaConfig {
    pub client: ClientConfig,
    pub observability: ObservabilityConfig,
}

impl CardiaConfig {
    pub const ENV_BASE_URL: &'static str = "CARDIA_BASE_URL";
    pub const ENV_TIMEOUT_SECS: &'static str = "CARDIA_TIMEOUT_SECS";
    pub const ENV_CONNECT_TIMEOUT_SECS: &'static str = "CARDIA_CONNECT_TIMEOUT_SECS";
    pub const ENV_LOG_LEVEL: &'static str = "CARDIA_LOG_LEVEL";

    /// Load configuration from an optional TOML file, then the process
    /// environment, then validate.
    ///
    /// A missing explicit `path` is an error; `None` means defaults only.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides_from(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `CARDIA_*` overrides read through `lookup`.
    ///
    /// Numeric values that fail to parse are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(Self::ENV_BASE_URL) {
            self.client.base_url = val;
        }
        if let Some(v) = lookup(Self::ENV_TIMEOUT_SECS).and_then(|s| s.parse::<u64>().ok()) {
            self.client.timeout_secs = v;
        }
        if let Some(v) =
            lookup(Self::ENV_CONNECT_TIMEOUT_SECS).and_then(|s| s.parse::<u64>().ok())
        {
            self.client.connect_timeout_secs = v;
        }
        if let Some(val) = lookup(Self::ENV_LOG_LEVEL) {
            self.observability.log_level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.client.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationFailed {
                field: "client.base_url".to_string(),
                message: format!("must be an http(s) URL, got {url:?}"),
            });
        }
        if self.client.timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "client.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.client.connect_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "client.connect_timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.observability.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
