//! Minimal verb-based HTTP client with automatic JSON handling
//!
//! This crate provides a thin convenience layer over the HTTP transport:
//! four verb entry points (GET, POST, PUT, DELETE), JSON request and
//! response (de)serialization, strict TLS verification, per-call timeouts,
//! and a response wrapper with status-class predicates and cached JSON
//! decoding.
//!
//! There is no connection reuse, no retry and no redirect following; every
//! call opens its own connection and blocks the caller until the transport
//! completes or fails.
//!
//! # Example
//!
//! ```no_run
//! use jsonreq::HttpClient;
//!
//! async fn example() -> Result<(), jsonreq::HttpError> {
//!     let client = HttpClient::new();
//!     let response = client
//!         .post("https://api.example.com/users")
//!         .json(&serde_json::json!({"name": "John"}))
//!         .send()
//!         .await?;
//!
//!     if response.is_success() {
//!         println!("created: {:?}", response.json());
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod request;
mod response;

pub use client::{delete, get, post, put, HttpClient};
pub use error::HttpError;
pub use request::{Body, Method, RequestBuilder, DEFAULT_TIMEOUT_SECS};
pub use response::Response;
