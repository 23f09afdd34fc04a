use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body of the prediction service's `GET /health` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthReport {
    pub status: String,
    /// Whether the service has its model in memory.
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthReport {
    /// The service is up and able to serve predictions.
    pub fn is_ready(&self) -> bool {
        self.status == "healthy" && self.model_loaded
    }
}
