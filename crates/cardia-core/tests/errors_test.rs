use cardia_core::errors::*;

#[test]
fn transport_connect_error_carries_url_and_reason() {
    let err = TransportError::Connect {
        url: "http://127.0.0.1:5000/predict".into(),
        reason: "connection refused".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("127.0.0.1:5000"));
    assert!(msg.contains("connection refused"));
}

#[test]
fn transport_status_error_carries_code_and_message() {
    let err = TransportError::Status {
        status: 400,
        message: "Missing field: age".into(),
    };
    assert_eq!(err.status(), Some(400));
    assert!(err.to_string().contains("Missing field: age"));
}

#[test]
fn non_status_errors_have_no_status_code() {
    let err = TransportError::Decode {
        reason: "expected value".into(),
    };
    assert_eq!(err.status(), None);
}

// --- From impls ---

#[test]
fn transport_error_converts_to_cardia_error() {
    let err: CardiaError = TransportError::Timeout {
        url: "http://svc/predict".into(),
    }
    .into();
    assert!(matches!(err, CardiaError::Transport(_)));
    assert!(err.is_transport());
}

#[test]
fn config_error_converts_to_cardia_error() {
    let err: CardiaError = ConfigError::ValidationFailed {
        field: "client.timeout_secs".into(),
        message: "must be greater than 0".into(),
    }
    .into();
    assert!(matches!(err, CardiaError::Config(_)));
    assert!(!err.is_transport());
    assert!(err.to_string().contains("client.timeout_secs"));
}
