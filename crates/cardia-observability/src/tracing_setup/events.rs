//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with an `event` name and structured fields.

/// Log an outbound prediction request.
pub fn prediction_requested(url: &str) {
    tracing::debug!(event = "prediction_requested", url = %url, "prediction requested");
}

/// Log a parsed prediction response.
pub fn prediction_received(death_event: i32, confidence: f64, elapsed_ms: u64) {
    tracing::info!(
        event = "prediction_received",
        death_event = death_event,
        confidence = confidence,
        elapsed_ms = elapsed_ms,
        "prediction received"
    );
}

/// Log a failed prediction exchange.
pub fn prediction_failed(url: &str, error: &str) {
    tracing::warn!(
        event = "prediction_failed",
        url = %url,
        error = %error,
        "prediction failed"
    );
}

/// Log a completed classification.
pub fn summary_classified(category: &str, risk_score: u32, top_features: usize) {
    tracing::info!(
        event = "summary_classified",
        category = %category,
        risk_score = risk_score,
        top_features = top_features,
        "risk summary classified"
    );
}

/// Log a service confidence outside [0, 100] that was sanitized.
pub fn confidence_out_of_range(raw: f64, sanitized: f64) {
    tracing::warn!(
        event = "confidence_out_of_range",
        raw = raw,
        sanitized = sanitized,
        "service confidence outside [0, 100]"
    );
}
