//! Error handling for Cardia.
//! One error enum per subsystem, `thiserror` only, aggregated into `CardiaError`.

pub mod config_error;
pub mod transport_error;

pub use config_error::ConfigError;
pub use transport_error::TransportError;

/// Top-level error for every fallible Cardia operation.
#[derive(Debug, thiserror::Error)]
pub enum CardiaError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type CardiaResult<T> = Result<T, CardiaError>;

impl CardiaError {
    /// Whether this error came from the network boundary.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
