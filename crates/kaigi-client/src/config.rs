//! Client configuration.
//!
//! The base endpoint is resolved once at construction and injected into the
//! client explicitly; nothing reads ambient global state after that, so
//! tests can point a client at a mock server deterministically.

use kaigi_core::{defaults, Error, Result};

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Per-call timeout for uploads in milliseconds.
    pub upload_timeout_ms: u64,
    /// Timeout for ordinary API requests in seconds.
    pub request_timeout_secs: u64,
    /// Interval between job status fetches in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.to_string(),
            upload_timeout_ms: defaults::UPLOAD_TIMEOUT_MS,
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            poll_interval_ms: defaults::POLL_INTERVAL_MS,
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given base URL, defaults elsewhere.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create config from environment variables (with defaults).
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `KAIGI_API_URL` | `http://localhost:8000` | Backend base URL |
    /// | `KAIGI_UPLOAD_TIMEOUT_MS` | `600000` | Upload timeout |
    /// | `KAIGI_POLL_INTERVAL_MS` | `5000` | Poll interval |
    pub fn from_env() -> Self {
        let base_url = std::env::var(defaults::ENV_API_URL)
            .unwrap_or_else(|_| defaults::API_BASE_URL.to_string());

        let upload_timeout_ms = std::env::var(defaults::ENV_UPLOAD_TIMEOUT_MS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults::UPLOAD_TIMEOUT_MS);

        let poll_interval_ms = std::env::var(defaults::ENV_POLL_INTERVAL_MS)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults::POLL_INTERVAL_MS);

        Self {
            base_url,
            upload_timeout_ms,
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            poll_interval_ms,
        }
    }

    /// Set the upload timeout.
    pub fn with_upload_timeout_ms(mut self, ms: u64) -> Self {
        self.upload_timeout_ms = ms;
        self
    }

    /// Set the ordinary request timeout.
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Set the poll interval.
    pub fn with_poll_interval_ms(mut self, ms: u64) -> Self {
        self.poll_interval_ms = ms;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::Config("base_url cannot be empty".to_string()));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "base_url must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.poll_interval_ms == 0 {
            return Err(Error::Config(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.upload_timeout_ms, 600_000);
        assert_eq!(config.poll_interval_ms, 5_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_with_base_url() {
        let config = ClientConfig::new("https://api.example.com");
        assert_eq!(config.base_url, "https://api.example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("http://localhost:8000")
            .with_upload_timeout_ms(1_000)
            .with_poll_interval_ms(50)
            .with_request_timeout_secs(5);
        assert_eq!(config.upload_timeout_ms, 1_000);
        assert_eq!(config.poll_interval_ms, 50);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let config = ClientConfig::new("");
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_non_http_base_url() {
        let config = ClientConfig::new("ftp://example.com");
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_poll_interval() {
        let config = ClientConfig::new("http://localhost:8000").with_poll_interval_ms(0);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}
