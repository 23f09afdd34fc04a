//! # cardia-observability
//!
//! Structured logging for the Cardia crates: subscriber setup driven by
//! `CARDIA_LOG` or [`ObservabilityConfig`](cardia_core::config::ObservabilityConfig),
//! span macros per operation, and typed log events.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing, init_tracing_with_filter};
