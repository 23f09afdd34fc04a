//! Configuration system for Cardia.
//! TOML-based, 3-layer resolution: env > config file > defaults.

pub mod cardia_config;
pub mod client_config;
pub mod defaults;
pub mod observability_config;

pub use cardia_config::CardiaConfig;
pub use client_config::ClientConfig;
pub use observability_config::ObservabilityConfig;
