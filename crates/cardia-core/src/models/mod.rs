//! Data model shared by the client, the classifier, and the presentation layer.

pub mod health_report;
pub mod patient_record;
pub mod prediction_response;
pub mod risk_summary;

pub use health_report::HealthReport;
pub use patient_record::{FieldViolation, PatientRecord};
pub use prediction_response::PredictionResponse;
pub use risk_summary::{FeatureImportance, RiskCategory, RiskSummary, UnknownRiskCategory};
