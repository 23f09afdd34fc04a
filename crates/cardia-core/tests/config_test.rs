use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use cardia_core::config::*;
use cardia_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CardiaConfig::from_toml("").unwrap();

    assert_eq!(config.client.base_url, "http://127.0.0.1:5000");
    assert_eq!(config.client.timeout_secs, 30);
    assert_eq!(config.client.connect_timeout_secs, 10);
    assert!(config.client.gzip);

    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
    assert_eq!(config, CardiaConfig::default());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[client]
base_url = "https://risk.example.org"
timeout_secs = 5
"#;
    let config = CardiaConfig::from_toml(toml).unwrap();
    assert_eq!(config.client.base_url, "https://risk.example.org");
    assert_eq!(config.client.timeout(), Duration::from_secs(5));
    // Non-overridden fields keep defaults
    assert_eq!(config.client.connect_timeout_secs, 10);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_rejects_malformed_toml() {
    let err = CardiaConfig::from_toml("[client\nbase_url = 1").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = CardiaConfig::default();
    config.client.base_url = "http://10.0.0.2:8000".into();
    config.observability.json = false;

    let text = config.to_toml().unwrap();
    let back = CardiaConfig::from_toml(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn env_overrides_take_priority_over_file_values() {
    let mut config = CardiaConfig::from_toml(
        r#"
[client]
base_url = "http://file-host:5000"
timeout_secs = 12
"#,
    )
    .unwrap();

    let env: HashMap<&str, &str> = [
        (CardiaConfig::ENV_BASE_URL, "http://env-host:9000"),
        (CardiaConfig::ENV_CONNECT_TIMEOUT_SECS, "3"),
        (CardiaConfig::ENV_LOG_LEVEL, "debug"),
    ]
    .into_iter()
    .collect();
    config.apply_overrides_from(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.client.base_url, "http://env-host:9000");
    assert_eq!(config.client.timeout_secs, 12);
    assert_eq!(config.client.connect_timeout_secs, 3);
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn unparsable_numeric_env_override_is_ignored() {
    let mut config = CardiaConfig::default();
    config.apply_overrides_from(|key| {
        (key == CardiaConfig::ENV_TIMEOUT_SECS).then(|| "soon".to_string())
    });
    assert_eq!(config.client.timeout_secs, 30);
}

#[test]
fn validate_rejects_non_http_base_url() {
    let mut config = CardiaConfig::default();
    config.client.base_url = "ftp://files".into();
    let err = config.validate().unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "client.base_url"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validate_rejects_zero_timeouts() {
    let mut config = CardiaConfig::default();
    config.client.timeout_secs = 0;
    assert!(config.validate().is_err());

    let mut config = CardiaConfig::default();
    config.client.connect_timeout_secs = 0;
    assert!(config.validate().is_err());
}

#[test]
fn load_reads_file_and_validates() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[client]\nbase_url = \"http://predictor.local:5000/\"\n\n[observability]\njson = false"
    )
    .unwrap();

    let config = CardiaConfig::from_file(file.path()).unwrap();
    assert_eq!(config.client.base_url, "http://predictor.local:5000/");
    assert!(!config.observability.json);
    assert!(config.validate().is_ok());
}

#[test]
fn load_with_missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("cardia.toml");
    let err = CardiaConfig::load(Some(&missing)).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn endpoint_joins_base_url_and_path() {
    let config = ClientConfig::with_base_url("http://127.0.0.1:5000/");
    assert_eq!(config.endpoint("/predict"), "http://127.0.0.1:5000/predict");

    let config = ClientConfig::with_base_url("http://127.0.0.1:5000");
    assert_eq!(config.endpoint("/health"), "http://127.0.0.1:5000/health");
}
