//! HTTP error types

use thiserror::Error;

/// Errors that can occur while building or dispatching a request
#[derive(Debug, Error)]
pub enum HttpError {
    /// Input string is not an absolute HTTP or HTTPS URL
    #[error("invalid URL `{0}`: not an HTTP URI")]
    InvalidUrl(String),
    /// Method token outside GET, POST, PUT and DELETE
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
    /// Header name or value the transport cannot represent
    #[error("invalid header: {0}")]
    Header(String),
    /// Request body serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Transport-level failure (connect, DNS, TLS, timeout), kept verbatim
    /// so callers can inspect the underlying cause
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
