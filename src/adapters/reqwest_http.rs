//! reqwest adapter for [`HttpClient`].

use async_trait::async_trait;
use std::time::Duration;

use crate::cli::VERSION;
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// [`HttpClient`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Client with a whole-request timeout and a `blogview/<version>`
    /// user agent.
    ///
    /// If the builder rejects the settings a plain client is used instead.
    pub fn with_timeout(timeout: Duration) -> Self {
        let built = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("blogview/{}", VERSION))
            .build();

        match built {
            Ok(client) => Self { client },
            Err(e) => {
                tracing::warn!(error = %e, "falling back to default HTTP client");
                Self::default()
            }
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(message)
        } else if err.is_connect() {
            HttpError::ConnectionFailed(message)
        } else if err.is_builder() {
            HttpError::InvalidUrl(message)
        } else {
            HttpError::Other(message)
        }
    }
}

fn header_map_to_headers(map: &reqwest::header::HeaderMap) -> Headers {
    map.iter()
        .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
        .collect()
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |req, (name, value)| req.header(name, value));

        let response = request.send().await?;
        let status = response.status().as_u16();
        let response_headers = header_map_to_headers(response.headers());
        let body = response.bytes().await?;

        tracing::trace!(url, status, "GET complete");
        Ok(Response::with_headers(status, response_headers, body))
    }
}
