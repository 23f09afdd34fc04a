//! # cardia-client
//!
//! Blocking HTTP client for the prediction service. One call to
//! [`PredictionClient::predict`] is exactly one `POST /predict`: no retry, no
//! caching, no coalescing. Every failure comes back as a
//! [`TransportError`](cardia_core::TransportError).

pub mod client;
pub mod transport;

pub use client::PredictionClient;
pub use transport::{HttpClient, HttpClientConfig};
