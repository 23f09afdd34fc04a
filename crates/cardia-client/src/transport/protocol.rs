//! Wire shapes of the prediction service beyond the core model types.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use cardia_core::TransportError;

/// Body the service returns with a 4xx/5xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Decode a success body into `T`.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::Decode {
        reason: e.to_string(),
    })
}

/// Best human-readable message for a non-success response.
///
/// Prefers the service's `{"error": ...}` field, then the raw body, then the
/// canonical reason phrase.
pub fn error_message(body: &str, canonical_reason: Option<&str>) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    canonical_reason.unwrap_or("request failed").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardia_core::PredictionResponse;

    #[test]
    fn error_message_prefers_error_field() {
        assert_eq!(
            error_message(r#"{"error": "Missing field: age"}"#, Some("Bad Request")),
            "Missing field: age"
        );
    }

    #[test]
    fn error_message_falls_back_to_body_then_reason() {
        assert_eq!(error_message("upstream down\n", None), "upstream down");
        assert_eq!(error_message("", Some("Bad Gateway")), "Bad Gateway");
        assert_eq!(error_message("  ", None), "request failed");
    }

    #[test]
    fn decode_failure_is_a_decode_error() {
        let err = decode::<PredictionResponse>("<html>oops</html>").unwrap_err();
        assert!(matches!(err, TransportError::Decode { .. }));
    }
}
