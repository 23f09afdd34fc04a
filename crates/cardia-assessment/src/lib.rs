//! # cardia-assessment
//!
//! Ties the prediction service to the classifier: one submission is one
//! service call followed by one pure classification. [`SubmissionState`]
//! models the caller-side lifecycle as explicit transitions instead of
//! shared mutable flags.

pub mod engine;
pub mod submission;

pub use engine::{Assessment, RiskAssessor};
pub use submission::SubmissionState;

/// Shown alongside every risk summary.
pub const DISCLAIMER: &str = "This ML prediction is for educational purposes only and should not replace professional medical advice. Always consult with a healthcare professional for medical decisions.";
