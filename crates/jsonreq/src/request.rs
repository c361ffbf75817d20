//! HTTP request builder

use std::str::FromStr;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::client::transport;
use crate::error::HttpError;
use crate::response::Response;

/// Default per-call timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The closed set of methods the client dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Method {
    /// Uppercase token as it appears on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// POST and PUT carry a request body, GET and DELETE never do
    pub(crate) fn allows_body(self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl FromStr for Method {
    type Err = HttpError;

    fn from_str(token: &str) -> Result<Self, HttpError> {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            _ => Err(HttpError::UnsupportedMethod(token.to_string())),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload
///
/// Serialization applies only to [`Body::Json`]; a [`Body::Raw`] payload is
/// attached unchanged. Absence of a body is `Option<Body>::None` on the
/// builder.
#[derive(Debug, Clone)]
pub enum Body {
    /// Pre-encoded payload, sent as-is
    Raw(String),
    /// Structured payload, encoded to JSON when the request is built
    Json(Value),
}

/// Fluent request builder returned by the [`HttpClient`] verb methods
///
/// Fallible builder steps record their failure instead of panicking; the
/// first recorded failure is surfaced from [`send`](Self::send) before any
/// network activity.
///
/// [`HttpClient`]: crate::client::HttpClient
#[derive(Debug)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    body: Option<Body>,
    timeout_secs: u64,
    error: Option<HttpError>,
}

impl RequestBuilder {
    pub(crate) fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            error: None,
        }
    }

    /// Add a header to the request
    ///
    /// A later entry for the same name (case-insensitive) overwrites an
    /// earlier one.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Add every entry of `entries` to the request, same rules as
    /// [`header`](Self::header)
    pub fn headers<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in entries {
            self.headers.push((key.into(), value.into()));
        }
        self
    }

    /// Set the request body
    ///
    /// Only POST and PUT transmit a body; on GET and DELETE it is silently
    /// dropped at build time.
    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the request body by serializing `body` to JSON
    pub fn json<T: Serialize>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(Body::Json(value)),
            Err(e) => self.error = Some(HttpError::Serialization(e)),
        }
        self
    }

    /// Set the read timeout in seconds (default 30)
    ///
    /// The connect phase gets a separate budget of `min(secs / 3, 10)`.
    pub fn timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Produce the transport-ready request descriptor
    pub(crate) fn build(self) -> Result<BuiltRequest, HttpError> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let url = parse_url(&self.url)?;

        let mut headers = HeaderMap::new();
        for (key, value) in &self.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| HttpError::Header(format!("{key}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| HttpError::Header(format!("{key}: {e}")))?;
            // insert, not append: later entries for a name win
            headers.insert(name, value);
        }

        let body = match self.body {
            Some(body) if self.method.allows_body() => Some(match body {
                Body::Raw(raw) => raw,
                Body::Json(value) => serde_json::to_string(&value)?,
            }),
            _ => None,
        };

        // a caller-supplied Content-Type is never overwritten, even when the
        // attached body was not JSON
        if body.is_some() && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        Ok(BuiltRequest {
            method: self.method,
            url,
            headers,
            body,
            timeout_secs: self.timeout_secs,
        })
    }

    /// Dispatch the request and wrap the outcome
    ///
    /// Validation and build errors surface here, before any network
    /// activity. Transport failures propagate as
    /// [`HttpError::Transport`](crate::HttpError::Transport).
    pub async fn send(self) -> Result<Response, HttpError> {
        let request = self.build()?;
        let client = transport(request.timeout_secs)?;

        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");

        let mut outbound = client
            .request(request.method.to_reqwest(), request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            outbound = outbound.body(body);
        }

        let raw = outbound.send().await?;
        Response::from_reqwest(raw).await
    }
}

/// Transport-ready descriptor produced by [`RequestBuilder::build`]
#[derive(Debug)]
pub(crate) struct BuiltRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<String>,
    pub(crate) timeout_secs: u64,
}

fn parse_url(raw: &str) -> Result<Url, HttpError> {
    let url = Url::parse(raw).map_err(|_| HttpError::InvalidUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(HttpError::InvalidUrl(raw.to_string()));
    }
    Ok(url)
}
