/// Cardia version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Path of the prediction endpoint, relative to the service base URL.
pub const PREDICT_PATH: &str = "/predict";

/// Path of the health endpoint, relative to the service base URL.
pub const HEALTH_PATH: &str = "/health";

/// Upper bound of the service's percentage-scaled confidence.
pub const MAX_CONFIDENCE: f64 = 100.0;

/// Maximum number of ranked risk factors in a summary.
pub const MAX_TOP_FEATURES: usize = 3;

/// `death_event` value meaning the service predicted a death event.
pub const DEATH_EVENT_PREDICTED: i32 = 1;
