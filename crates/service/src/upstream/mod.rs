//! Transports to the upstream employee API.
//!
//! An [`EmployeeUpstream`] performs exactly one round trip per call and
//! reports failures as a typed [`UpstreamError`]. Collapsing those errors
//! into empty or absent results is the job of
//! [`EmployeeGateway`](crate::EmployeeGateway), not of the transport.

pub mod http;
pub mod memory;

use async_trait::async_trait;
use roster_core::{Employee, EmployeeDraft};

// ──────────────────────────────────────────────
// UpstreamError
// ──────────────────────────────────────────────

/// Everything that can go wrong talking to the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// Connection refused, DNS failure, timeout, broken body stream.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The upstream answered with a non-success status (429 when rate limited).
    #[error("upstream returned status {status} for {url}")]
    Status { url: String, status: u16 },

    /// The body was not a `{ "data": ... }` envelope of the expected shape.
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// The id cannot be addressed as a single record path segment.
    #[error("invalid employee id: {id:?}")]
    InvalidId { id: String },

    /// The upstream holds no employee with this id.
    #[error("employee not found: {id}")]
    NotFound { id: String },

    /// The blocking task running the request did not complete.
    #[error("upstream task failed: {0}")]
    Join(String),
}

// ──────────────────────────────────────────────
// EmployeeUpstream trait
// ──────────────────────────────────────────────

/// One call, one upstream round trip.
///
/// Implementations hold no per-call state, so a single instance is shared
/// by every concurrent request.
#[async_trait]
pub trait EmployeeUpstream: Send + Sync {
    /// `GET {base}`: the full employee collection, in upstream order.
    async fn fetch_all(&self) -> Result<Vec<Employee>, UpstreamError>;

    /// `GET {base}/{id}`.
    async fn fetch_by_id(&self, id: &str) -> Result<Employee, UpstreamError>;

    /// `POST {base}` with the draft as JSON. Returns the created record.
    async fn create(&self, draft: &EmployeeDraft) -> Result<Employee, UpstreamError>;

    /// `DELETE {base}/{id}`. Succeeds whenever the round trip completed.
    async fn delete_by_id(&self, id: &str) -> Result<(), UpstreamError>;

    /// Short name for logs (e.g. "http", "memory").
    fn upstream_id(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_display() {
        let err = UpstreamError::Transport {
            url: "http://h/e".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "request to http://h/e failed: connection refused");

        let err = UpstreamError::Status {
            url: "http://h/e".to_string(),
            status: 429,
        };
        assert_eq!(err.to_string(), "upstream returned status 429 for http://h/e");

        let err = UpstreamError::NotFound {
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "employee not found: 42");
    }
}
