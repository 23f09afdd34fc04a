use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Transport settings for the prediction service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the prediction service, without a trailing path.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Accept gzip-compressed responses.
    pub gzip: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: defaults::DEFAULT_CONNECT_TIMEOUT_SECS,
            gzip: defaults::DEFAULT_GZIP,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url` with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Join the base URL and an endpoint path, tolerating a trailing slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
