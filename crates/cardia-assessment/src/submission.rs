//! Caller-side submission lifecycle as immutable state transitions.

use cardia_core::errors::{CardiaError, CardiaResult};
use cardia_core::models::RiskSummary;

use crate::engine::Assessment;

/// Where a form submission stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Completed(Assessment),
    /// User-facing failure message.
    Failed(String),
}

impl SubmissionState {
    /// A submission was sent. Clears any previous result or error.
    #[must_use]
    pub fn begin(self) -> Self {
        Self::Submitting
    }

    /// A submission finished.
    ///
    /// Resolutions arriving after [`reset`](Self::reset) are dropped. Otherwise
    /// the latest resolution wins, including over an earlier completed one.
    #[must_use]
    pub fn resolve(self, result: CardiaResult<Assessment>) -> Self {
        if matches!(self, Self::Idle) {
            tracing::debug!("dropping resolution for a reset submission");
            return self;
        }
        match result {
            Ok(assessment) => Self::Completed(assessment),
            Err(e) => Self::Failed(failure_message(&e)),
        }
    }

    /// Back to the blank form.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::Idle
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn assessment(&self) -> Option<&Assessment> {
        match self {
            Self::Completed(a) => Some(a),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<&RiskSummary> {
        self.assessment().map(|a| &a.summary)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Message shown to the user when a submission fails.
pub fn failure_message(error: &CardiaError) -> String {
    format!("Failed to get prediction: {error}")
}
