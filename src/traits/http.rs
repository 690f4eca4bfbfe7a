//! HTTP seam for the document fetch.
//!
//! The viewer reads exactly one resource per session, so the trait is a
//! single buffered GET. Production plugs in reqwest, tests plug in the mock.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// Request or response headers, names as given.
pub type Headers = HashMap<String, String>;

/// A fully buffered response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self::with_headers(status, Headers::new(), body)
    }

    pub fn with_headers(status: u16, headers: Headers, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// 2xx only; redirects are followed by the client before we see them.
    pub fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }

    /// Deserialize the body, keeping serde_json's error as is.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Failures below the HTTP status level: the request never produced a
/// response we could read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request timeout: {0}")]
    Timeout(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP error: {0}")]
    Other(String),
}

/// Buffered HTTP GET.
///
/// ```ignore
/// use blogview::traits::{Headers, HttpClient};
///
/// let response = client.get("http://localhost:5173/people.json", &Headers::new()).await?;
/// assert!(response.is_success());
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
