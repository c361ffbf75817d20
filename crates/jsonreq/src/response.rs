//! HTTP response wrapper

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::HttpError;

/// Completed HTTP response
///
/// Owns the status, headers and body captured from the transport. The body
/// is kept verbatim; JSON decoding happens on the first [`json`](Self::json)
/// access and the outcome is cached for the lifetime of the value, so the
/// decode runs at most once even under concurrent first access.
#[derive(Debug)]
pub struct Response {
    status: u16,
    headers: HashMap<String, Vec<String>>,
    body: String,
    json: OnceCell<Option<Value>>,
}

impl Response {
    /// Assemble a response from already-captured parts
    ///
    /// Header names are expected in lowercase, the form the transport
    /// delivers them in.
    pub fn new(
        status: u16,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            json: OnceCell::new(),
        }
    }

    pub(crate) async fn from_reqwest(raw: reqwest::Response) -> Result<Self, HttpError> {
        let status = raw.status().as_u16();

        let mut headers: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in raw.headers() {
            headers
                .entry(name.as_str().to_string())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }

        let body = raw.text().await?;
        Ok(Self::new(status, headers, body))
    }

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response body, verbatim
    pub fn body(&self) -> &str {
        &self.body
    }

    /// All captured headers, keyed by lowercase name
    ///
    /// A header the peer repeated carries one value per occurrence.
    pub fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
    }

    /// First value of `name`, if the response carried it
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .or_else(|| self.headers.get(&name.to_ascii_lowercase()))
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Whether the status is a success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the status is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Whether the status is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Body decoded as JSON
    ///
    /// `None` for an empty body (the decoder is never invoked) and for a
    /// body that fails to decode; the two cases are deliberately
    /// indistinguishable. The decode runs at most once per response, on
    /// first access.
    pub fn json(&self) -> Option<&Value> {
        self.json
            .get_or_init(|| {
                if self.body.is_empty() {
                    return None;
                }
                serde_json::from_str(&self.body).ok()
            })
            .as_ref()
    }

    /// Body decoded as JSON into a concrete type
    ///
    /// Same policy as [`json`](Self::json): any failure comes back as
    /// `None`.
    pub fn json_as<T: DeserializeOwned>(&self) -> Option<T> {
        self.json()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}
