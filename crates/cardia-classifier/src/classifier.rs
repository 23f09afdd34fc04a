//! `classify`: the single entry point of the crate.

use cardia_core::{PatientRecord, PredictionResponse, RiskSummary};
use cardia_observability::events;

use crate::category::{categorize, recommendations_for};
use crate::confidence::{round_percent, sanitize_confidence};
use crate::features::top_risk_factors;

/// Turn a service response and the record it scored into a [`RiskSummary`].
///
/// Total and deterministic: no I/O, no hidden state, never fails. The
/// category depends only on `(death_event, confidence)`; the risk factors only
/// on `input`.
pub fn classify(response: &PredictionResponse, input: &PatientRecord) -> RiskSummary {
    let _span = cardia_observability::classification_span!(response.death_event).entered();

    let confidence = sanitize_confidence(response.confidence);
    if confidence != response.confidence {
        events::confidence_out_of_range(response.confidence, confidence);
    }

    let risk_category = categorize(response.death_event, confidence);
    let percent = round_percent(confidence);
    let top_features = top_risk_factors(input);

    events::summary_classified(risk_category.as_str(), percent, top_features.len());

    RiskSummary {
        risk_score: percent,
        risk_category,
        confidence: percent,
        recommendations: recommendations_for(risk_category)
            .iter()
            .map(|r| r.to_string())
            .collect(),
        top_features,
        death_event: response.death_event,
    }
}
