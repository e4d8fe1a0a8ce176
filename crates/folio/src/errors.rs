//! Shared error types and utilities for the folio workspace.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// A request never made it to the BFF, or its response could not be read.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("failed to read response body: {0}")]
    Body(String),
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for TransportError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => TransportError::InvalidRequest(e.to_string()),
            other => TransportError::Network(other.to_string()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            TransportError::InvalidRequest(err.to_string())
        } else if err.is_body() || err.is_decode() {
            TransportError::Body(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}
