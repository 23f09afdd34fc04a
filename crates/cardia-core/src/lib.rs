//! # cardia-core
//!
//! Foundation crate for the Cardia heart-failure risk client.
//! Defines the data model, error taxonomy, configuration, and the
//! `PredictionService` seam. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CardiaConfig;
pub use errors::{CardiaError, CardiaResult, TransportError};
pub use models::{
    FeatureImportance, PatientRecord, PredictionResponse, RiskCategory, RiskSummary,
};
pub use traits::PredictionService;
