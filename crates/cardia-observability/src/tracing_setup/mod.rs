//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use cardia_core::config::ObservabilityConfig;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted by [`init_tracing`].
pub const LOG_ENV_VAR: &str = "CARDIA_LOG";

/// Initialize the global subscriber with structured JSON output.
///
/// Respects the `CARDIA_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Returns `false` if a global
/// subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}

/// Initialize tracing from the `[observability]` config section.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::new(&config.log_level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.compact().try_init().is_ok()
    }
}

/// Build a JSON subscriber writing to `writer` without installing it.
///
/// Useful with `tracing::subscriber::with_default` to capture events.
pub fn json_subscriber<W>(filter: &str, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(writer)
        .with_target(true)
        .json()
        .finish()
}
