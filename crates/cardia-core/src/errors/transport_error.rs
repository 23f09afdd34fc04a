/// Failures of the request/response exchange with the prediction service.
///
/// Every variant is surfaced to the caller as-is; none are retried.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to build HTTP client: {reason}")]
    Build { reason: String },

    #[error("could not reach {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("response could not be decoded: {reason}")]
    Decode { reason: String },
}

impl TransportError {
    /// HTTP status code, when the service answered with a non-success status.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
