//! HTTP client wrapper

use std::time::Duration;

use crate::error::HttpError;
use crate::request::{Body, Method, RequestBuilder};
use crate::response::Response;

/// Stateless HTTP client exposing the four verb entry points
///
/// Every call configures its own transport (strict TLS verification,
/// per-call timeouts, no redirect following, no connection reuse), so no
/// state crosses calls and the client is free to be shared or rebuilt at
/// will.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpClient;

impl HttpClient {
    /// Create a new HTTP client
    pub fn new() -> Self {
        Self
    }

    // === Verb entry points ===

    /// GET request builder
    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Method::Get, url)
    }

    /// POST request builder
    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Method::Post, url)
    }

    /// PUT request builder
    pub fn put(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Method::Put, url)
    }

    /// DELETE request builder
    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Method::Delete, url)
    }

    // === Generic dispatch primitive ===

    /// Request builder for a method carried as a token
    ///
    /// The four verb methods cover normal use; this entry point exists for
    /// callers that receive the method as data. Tokens outside GET, POST,
    /// PUT and DELETE are rejected with
    /// [`HttpError::UnsupportedMethod`](crate::HttpError::UnsupportedMethod).
    pub fn request(&self, method: &str, url: &str) -> Result<RequestBuilder, HttpError> {
        Ok(RequestBuilder::new(method.parse()?, url))
    }
}

/// Transport configured for a single call
///
/// Peer certificate verification stays at the rustls default (strict);
/// redirects are not followed and the idle pool is disabled so each call
/// opens and closes its own connection.
pub(crate) fn transport(timeout_secs: u64) -> Result<reqwest::Client, HttpError> {
    reqwest::Client::builder()
        .read_timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs(timeout_secs)))
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .build()
        .map_err(HttpError::Transport)
}

/// Connect-phase budget: a third of the read timeout, capped at ten seconds
pub(crate) fn connect_timeout_secs(timeout_secs: u64) -> u64 {
    (timeout_secs / 3).min(10)
}

// === Convenience free functions ===

/// GET `url` with default headers and timeout
pub async fn get(url: &str) -> Result<Response, HttpError> {
    HttpClient::new().get(url).send().await
}

/// POST `body` to `url` with default headers and timeout
pub async fn post(url: &str, body: Body) -> Result<Response, HttpError> {
    HttpClient::new().post(url).body(body).send().await
}

/// PUT `body` to `url` with default headers and timeout
pub async fn put(url: &str, body: Body) -> Result<Response, HttpError> {
    HttpClient::new().put(url).body(body).send().await
}

/// DELETE `url` with default headers and timeout
pub async fn delete(url: &str) -> Result<Response, HttpError> {
    HttpClient::new().delete(url).send().await
}
