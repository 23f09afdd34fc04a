use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::DEATH_EVENT_PREDICTED;

/// Raw result of the prediction service.
///
/// Untrusted input: `confidence` is documented as a percentage in [0, 100]
/// but nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResponse {
    /// 1 when the service predicts a death event.
    pub death_event: i32,
    /// Percentage-scaled probability of the death-event class.
    pub confidence: f64,
    /// Service-side status marker ("success"). Ignored by the classifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub status: Option<String>,
}

impl PredictionResponse {
    pub fn new(death_event: i32, confidence: f64) -> Self {
        Self {
            death_event,
            confidence,
            status: None,
        }
    }

    /// Whether the service predicted a death event.
    pub fn is_death_predicted(&self) -> bool {
        self.death_event == DEATH_EVENT_PREDICTED
    }

    /// Confidence rescaled to a probability.
    pub fn death_probability(&self) -> f64 {
        self.confidence / 100.0
    }
}
