//! HTTP transport: talks to the upstream employee API over the network.
//!
//! Uses `ureq` (sync) wrapped in `tokio::task::spawn_blocking` to avoid
//! blocking the async runtime. One `ureq::Agent` is built at construction
//! and cloned into each blocking task; clones share the connection pool.

use async_trait::async_trait;
use roster_core::{Employee, EmployeeDraft, Envelope};
use serde::de::DeserializeOwned;
use ureq::http::Response;
use ureq::Body;

use super::{EmployeeUpstream, UpstreamError};
use crate::config::UpstreamConfig;

/// Transport that reaches the upstream API over HTTP.
///
/// - Every request carries the configured global timeout.
/// - Status codes are inspected here rather than surfaced as `ureq` errors,
///   so a completed DELETE is a success regardless of status.
pub struct HttpUpstream {
    config: UpstreamConfig,
    agent: ureq::Agent,
}

impl HttpUpstream {
    pub fn new(config: UpstreamConfig) -> Self {
        let agent_config = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .http_status_as_error(false)
            .build();

        HttpUpstream {
            agent: ureq::Agent::new_with_config(agent_config),
            config,
        }
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Run one blocking request on the blocking pool.
    async fn blocking<T, F>(&self, call: F) -> Result<T, UpstreamError>
    where
        F: FnOnce(ureq::Agent) -> Result<T, UpstreamError> + Send + 'static,
        T: Send + 'static,
    {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || call(agent))
            .await
            .map_err(|e| UpstreamError::Join(format!("task join error: {}", e)))?
    }
}

fn transport_error(url: &str, err: ureq::Error) -> UpstreamError {
    UpstreamError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    }
}

fn check_status(url: &str, response: &Response<Body>) -> Result<(), UpstreamError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(UpstreamError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

/// Decode the `data` field of a successful response.
fn read_data<T: DeserializeOwned>(
    url: &str,
    response: Response<Body>,
) -> Result<T, UpstreamError> {
    check_status(url, &response)?;

    let envelope: Envelope<T> = response.into_body().read_json().map_err(|e| match e {
        ureq::Error::Json(e) => UpstreamError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        },
        other => transport_error(url, other),
    })?;

    Ok(envelope.into_data())
}

#[async_trait]
impl EmployeeUpstream for HttpUpstream {
    async fn fetch_all(&self) -> Result<Vec<Employee>, UpstreamError> {
        let url = self.config.collection_url();
        self.blocking(move |agent| {
            tracing::debug!(%url, "GET employees");
            let response = agent
                .get(&url)
                .header("Accept", "application/json")
                .call()
                .map_err(|e| transport_error(&url, e))?;
            read_data(&url, response)
        })
        .await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Employee, UpstreamError> {
        let url = self.config.record_url(id)?;
        let id = id.to_string();
        self.blocking(move |agent| {
            tracing::debug!(%url, "GET employee");
            let response = agent
                .get(&url)
                .header("Accept", "application/json")
                .call()
                .map_err(|e| transport_error(&url, e))?;

            if response.status().as_u16() == 404 {
                return Err(UpstreamError::NotFound { id });
            }

            let data: Option<Employee> = read_data(&url, response)?;
            data.ok_or(UpstreamError::NotFound { id })
        })
        .await
    }

    async fn create(&self, draft: &EmployeeDraft) -> Result<Employee, UpstreamError> {
        let url = self.config.collection_url();
        let draft = draft.clone();
        self.blocking(move |agent| {
            tracing::debug!(%url, name = %draft.name, "POST employee");
            // send_json sets Content-Type: application/json
            let response = agent
                .post(&url)
                .header("Accept", "application/json")
                .send_json(&draft)
                .map_err(|e| transport_error(&url, e))?;

            let data: Option<Employee> = read_data(&url, response)?;
            data.ok_or_else(|| UpstreamError::Decode {
                url: url.clone(),
                message: "create response carried no record".to_string(),
            })
        })
        .await
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), UpstreamError> {
        let url = self.config.record_url(id)?;
        self.blocking(move |agent| {
            tracing::debug!(%url, "DELETE employee");
            let response = agent
                .delete(&url)
                .call()
                .map_err(|e| transport_error(&url, e))?;

            if !response.status().is_success() {
                tracing::debug!(
                    %url,
                    status = response.status().as_u16(),
                    "delete completed with non-success status"
                );
            }
            Ok(())
        })
        .await
    }

    fn upstream_id(&self) -> &str {
        "http"
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
