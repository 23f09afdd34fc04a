use crate::errors::CardiaResult;
use crate::models::{HealthReport, PatientRecord, PredictionResponse};

/// A remote model that scores a patient record.
///
/// Implementations perform exactly one exchange per call and surface every
/// failure; they never substitute a default response.
pub trait PredictionService: Send + Sync {
    /// Submit the record and return the raw prediction.
    fn predict(&self, record: &PatientRecord) -> CardiaResult<PredictionResponse>;

    /// Query the service's readiness.
    fn health(&self) -> CardiaResult<HealthReport>;
}

impl<T: PredictionService + ?Sized> PredictionService for &T {
    fn predict(&self, record: &PatientRecord) -> CardiaResult<PredictionResponse> {
        (**self).predict(record)
    }

    fn health(&self) -> CardiaResult<HealthReport> {
        (**self).health()
    }
}
