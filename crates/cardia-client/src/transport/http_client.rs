//! Single-attempt HTTP client with timeouts and gzip.

use std::time::Duration;

use cardia_core::config::ClientConfig;
use cardia_core::TransportError;
use serde::{de::DeserializeOwned, Serialize};

use super::protocol;

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the prediction service.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Accept gzip-compressed responses.
    pub gzip: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

impl From<&ClientConfig> for HttpClientConfig {
    fn from(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
            connect_timeout: config.connect_timeout(),
            gzip: config.gzip,
        }
    }
}

impl HttpClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Full URL of `path` on the service.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// HTTP transport client. Wraps a reusable `reqwest` blocking client.
///
/// Makes exactly one attempt per call; the caller decides what to do with
/// a failure.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: HttpClientConfig,
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, TransportError> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(config.gzip)
            .user_agent(concat!("cardia/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Build {
                reason: e.to_string(),
            })?;

        Ok(Self { config, inner })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// POST `payload` as JSON to `path` and decode the JSON answer.
    pub fn post_json<Req: Serialize, Resp: DeserializeOwned>(
        &self,
        path: &str,
        payload: &Req,
    ) -> Result<Resp, TransportError> {
        let url = self.config.url(path);
        let request = self.inner.post(&url).json(payload);
        self.execute(&url, request)
    }

    /// GET `path` and decode the JSON answer.
    pub fn get_json<Resp: DeserializeOwned>(&self, path: &str) -> Result<Resp, TransportError> {
        let url = self.config.url(path);
        let request = self.inner.get(&url);
        self.execute(&url, request)
    }

    fn execute<Resp: DeserializeOwned>(
        &self,
        url: &str,
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<Resp, TransportError> {
        let response = request.send().map_err(|e| send_error(url, e))?;
        let status = response.status();
        let body = response.text().map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    url: url.to_string(),
                }
            } else {
                TransportError::Decode {
                    reason: format!("failed to read body: {e}"),
                }
            }
        })?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: protocol::error_message(&body, status.canonical_reason()),
            });
        }

        protocol::decode(&body)
    }
}

/// Classify a `reqwest` send failure.
fn send_error(url: &str, e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else {
        TransportError::Connect {
            url: url.to_string(),
            reason: e.to_string(),
        }
    }
}
