//! Shared HTTP client plumbing for the backend API.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use kaigi_core::{ApiErrorBody, Error, Result};

use crate::config::ClientConfig;

/// Typed client for the kaigi backend.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) http: Client,
    pub(crate) config: ClientConfig,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!(base_url = %config.base_url, "API client initialized");

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Build a [`Error::Server`] from a non-2xx response.
    ///
    /// Uses the backend's `detail` field when the body is JSON-parseable,
    /// otherwise the caller's fixed fallback message.
    pub(crate) async fn error_from_response(response: Response, fallback: &str) -> Error {
        let status = response.status().as_u16();
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => fallback.to_string(),
        };
        Error::Server { status, message }
    }

    /// Parse a 2xx response body, surfacing malformed JSON as a parse error
    /// distinct from transport failures.
    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            debug!(error = %e, "response body failed to parse");
            Error::Parse("レスポンスの解析に失敗しました".to_string())
        })
    }
}
