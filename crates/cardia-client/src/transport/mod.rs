//! Transport layer: single-attempt HTTP client and the service's wire shapes.

pub mod http_client;
pub mod protocol;

pub use http_client::{HttpClient, HttpClientConfig};
pub use protocol::ErrorBody;
