//! RiskAssessor: one prediction request followed by classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cardia_classifier::classify;
use cardia_core::errors::CardiaResult;
use cardia_core::models::{HealthReport, PatientRecord, RiskSummary};
use cardia_core::traits::PredictionService;

/// A classified submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Correlates the log lines of this submission.
    pub request_id: Uuid,
    pub assessed_at: DateTime<Utc>,
    pub summary: RiskSummary,
}

/// Runs submissions against a [`PredictionService`].
///
/// Holds no per-submission state, so one assessor can serve any number of
/// concurrent submissions.
#[derive(Debug, Clone)]
pub struct RiskAssessor<S: PredictionService> {
    service: S,
}

impl<S: PredictionService> RiskAssessor<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Submit `record` and classify the answer.
    ///
    /// A service failure is returned unchanged; no summary is produced for it.
    pub fn assess(&self, record: &PatientRecord) -> CardiaResult<Assessment> {
        let request_id = Uuid::new_v4();
        let _span = cardia_observability::assessment_span!(request_id).entered();

        let response = self.service.predict(record)?;
        let summary = classify(&response, record);

        Ok(Assessment {
            request_id,
            assessed_at: Utc::now(),
            summary,
        })
    }

    /// Ask the service whether it can take submissions.
    pub fn health(&self) -> CardiaResult<HealthReport> {
        self.service.health()
    }
}
