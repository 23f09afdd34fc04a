//! PredictionClient: the `PredictionService` backed by the HTTP service.

use std::time::Instant;

use cardia_core::config::ClientConfig;
use cardia_core::constants::{HEALTH_PATH, PREDICT_PATH};
use cardia_core::errors::CardiaResult;
use cardia_core::models::{HealthReport, PatientRecord, PredictionResponse};
use cardia_core::traits::PredictionService;
use cardia_observability::events;

use crate::transport::{HttpClient, HttpClientConfig};

/// Client for `POST /predict` and `GET /health`.
///
/// Stateless apart from the pooled connection handle; cheap to clone and
/// safe to share across threads. Concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: HttpClient,
}

impl PredictionClient {
    /// Build a client from the `[client]` config section.
    pub fn new(config: &ClientConfig) -> CardiaResult<Self> {
        Ok(Self::with_http(HttpClient::new(HttpClientConfig::from(
            config,
        ))?))
    }

    /// Client against `base_url` with default timeouts.
    pub fn connect(base_url: impl Into<String>) -> CardiaResult<Self> {
        Ok(Self::with_http(HttpClient::new(
            HttpClientConfig::with_base_url(base_url),
        )?))
    }

    pub fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn base_url(&self) -> &str {
        &self.http.config().base_url
    }
}

impl PredictionService for PredictionClient {
    fn predict(&self, record: &PatientRecord) -> CardiaResult<PredictionResponse> {
        let url = self.http.config().url(PREDICT_PATH);
        let _span = cardia_observability::prediction_span!(url).entered();
        events::prediction_requested(&url);

        let started = Instant::now();
        match self.http.post_json::<_, PredictionResponse>(PREDICT_PATH, record) {
            Ok(response) => {
                events::prediction_received(
                    response.death_event,
                    response.confidence,
                    started.elapsed().as_millis() as u64,
                );
                Ok(response)
            }
            Err(e) => {
                events::prediction_failed(&url, &e.to_string());
                Err(e.into())
            }
        }
    }

    fn health(&self) -> CardiaResult<HealthReport> {
        let report = self
            .http
            .get_json::<HealthReport>(HEALTH_PATH)
            .inspect_err(|e| tracing::warn!(error = %e, "health check failed"))?;
        tracing::debug!(
            status = %report.status,
            model_loaded = report.model_loaded,
            "health check"
        );
        Ok(report)
    }
}
