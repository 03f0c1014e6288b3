//! Upstream connection settings.
//!
//! Resolution order for every value: explicit argument, then environment
//! variable, then built-in default.

use std::time::Duration;

use url::Url;

use crate::upstream::UpstreamError;

/// Base URL of the upstream employee collection when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8112/api/v1/employee";

/// Upstream request timeout when nothing is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the upstream base URL.
pub const BASE_URL_ENV: &str = "ROSTER_UPSTREAM_URL";

/// Environment variable overriding the upstream timeout, in whole seconds.
pub const TIMEOUT_ENV: &str = "ROSTER_UPSTREAM_TIMEOUT_SECS";

/// Errors raised while building an [`UpstreamConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid upstream URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("upstream timeout must be greater than zero")]
    ZeroTimeout,
}

/// Where the upstream employee API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    base_url: Url,
    timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let invalid = |message: String| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            message,
        };

        let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(UpstreamConfig {
            base_url: url,
            timeout,
        })
    }

    /// Resolve from explicit values, falling back to the process environment.
    pub fn resolve(
        base_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ConfigError> {
        Self::resolve_with(base_url, timeout_secs, |key| std::env::var(key).ok())
    }

    /// Same as [`resolve`](Self::resolve) with a caller-supplied variable lookup.
    pub fn resolve_with(
        base_url: Option<String>,
        timeout_secs: Option<u64>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url
            .or_else(|| lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // An unparseable env value is ignored; an explicit zero is not.
        let timeout_secs = timeout_secs
            .or_else(|| lookup(TIMEOUT_ENV).and_then(|v| v.trim().parse::<u64>().ok()))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(&base_url, Duration::from_secs(timeout_secs))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// URL of the employee collection (`GET`/`POST`).
    pub fn collection_url(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }

    /// URL of a single employee (`GET`/`DELETE`). The id is percent-encoded
    /// as one path segment.
    ///
    /// `""`, `"."` and `".."` are rejected: `url` drops dot segments on push,
    /// which would turn the record URL into the collection URL.
    pub fn record_url(&self, id: &str) -> Result<String, UpstreamError> {
        if matches!(id, "" | "." | "..") {
            return Err(UpstreamError::InvalidId { id: id.to_string() });
        }

        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        Ok(url.to_string())
    }
}
