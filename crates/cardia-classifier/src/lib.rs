//! # cardia-classifier
//!
//! Pure transformation of a prediction service response, plus the record it
//! was computed from, into a display-ready [`RiskSummary`](cardia_core::RiskSummary).
//!
//! ## Decision table
//!
//! | death_event | confidence | category |
//! |-------------|------------|----------|
//! | 1 | > 70 | Critical |
//! | 1 | <= 70 | High |
//! | other | < 30 | Low |
//! | other | >= 30 | Moderate |
//!
//! Risk factors come from five fixed clinical thresholds on the record and
//! never depend on the service's confidence.

pub mod category;
pub mod classifier;
pub mod confidence;
pub mod features;

pub use category::{categorize, recommendations_for};
pub use classifier::classify;
pub use confidence::{round_percent, sanitize_confidence};
pub use features::{top_risk_factors, RISK_THRESHOLDS};
