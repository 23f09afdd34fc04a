//! Span definitions per operation: prediction request, classification, assessment.

/// Create a span around one prediction-service exchange.
#[macro_export]
macro_rules! prediction_span {
    ($url:expr) => {
        tracing::info_span!("cardia.prediction", url = %$url)
    };
}

/// Create a span around one classification.
#[macro_export]
macro_rules! classification_span {
    ($death_event:expr) => {
        tracing::debug_span!("cardia.classification", death_event = $death_event)
    };
}

/// Create a span covering a full submission (request + classification).
#[macro_export]
macro_rules! assessment_span {
    ($request_id:expr) => {
        tracing::info_span!("cardia.assessment", request_id = %$request_id)
    };
}
