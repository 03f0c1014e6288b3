//! The single boundary where upstream failures are collapsed.
//!
//! Transports report a typed [`UpstreamError`]; callers above this layer see
//! only empty collections, absent records and a two-valued delete outcome.
//! The underlying cause is logged before it is dropped.

use std::sync::Arc;

use roster_core::{DeleteOutcome, Employee, EmployeeDraft};

use crate::upstream::{EmployeeUpstream, UpstreamError};

/// Lossy adapter over an [`EmployeeUpstream`].
///
/// Cloning is cheap: clones share the same transport.
#[derive(Clone)]
pub struct EmployeeGateway {
    upstream: Arc<dyn EmployeeUpstream>,
}

impl EmployeeGateway {
    pub fn new(upstream: Arc<dyn EmployeeUpstream>) -> Self {
        EmployeeGateway { upstream }
    }

    /// All employees, or an empty collection on any failure.
    pub async fn fetch_all(&self) -> Vec<Employee> {
        match self.upstream.fetch_all().await {
            Ok(employees) => employees,
            Err(e) => {
                self.log_failure("fetch_all", &e);
                Vec::new()
            }
        }
    }

    /// The employee with `id`, or `None` on any failure including "not found".
    pub async fn fetch_by_id(&self, id: &str) -> Option<Employee> {
        match self.upstream.fetch_by_id(id).await {
            Ok(employee) => Some(employee),
            Err(e) => {
                self.log_failure("fetch_by_id", &e);
                None
            }
        }
    }

    /// The created employee, or `None` when creation did not yield a record.
    pub async fn create(&self, draft: &EmployeeDraft) -> Option<Employee> {
        match self.upstream.create(draft).await {
            Ok(employee) => Some(employee),
            Err(e) => {
                self.log_failure("create", &e);
                None
            }
        }
    }

    pub async fn delete_by_id(&self, id: &str) -> DeleteOutcome {
        match self.upstream.delete_by_id(id).await {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) => {
                self.log_failure("delete_by_id", &e);
                DeleteOutcome::Failed
            }
        }
    }

    fn log_failure(&self, operation: &str, error: &UpstreamError) {
        let upstream = self.upstream.upstream_id();
        match error {
            UpstreamError::NotFound { .. } => {
                tracing::debug!(
                    upstream,
                    operation,
                    error = %error,
                    "upstream call returned nothing"
                );
            }
            _ => {
                tracing::warn!(upstream, operation, error = %error, "upstream call failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::memory::InMemoryUpstream;
    use async_trait::async_trait;

    /// Transport whose every call fails with a clone of `error`.
    struct FailingUpstream {
        error: UpstreamError,
    }

    #[async_trait]
    impl EmployeeUpstream for FailingUpstream {
        async fn fetch_all(&self) -> Result<Vec<Employee>, UpstreamError> {
            Err(self.error.clone())
        }

        async fn fetch_by_id(&self, _id: &str) -> Result<Employee, UpstreamError> {
            Err(self.error.clone())
        }

        async fn create(&self, _draft: &EmployeeDraft) -> Result<Employee, UpstreamError> {
            Err(self.error.clone())
        }

        async fn delete_by_id(&self, _id: &str) -> Result<(), UpstreamError> {
            Err(self.error.clone())
        }

        fn upstream_id(&self) -> &str {
            "failing"
        }
    }

    fn failing(error: UpstreamError) -> EmployeeGateway {
        EmployeeGateway::new(Arc::new(FailingUpstream { error }))
    }

    fn every_error_kind() -> Vec<UpstreamError> {
        vec![
            UpstreamError::Transport {
                url: "http://h/e".to_string(),
                message: "connection refused".to_string(),
            },
            UpstreamError::Status {
                url: "http://h/e".to_string(),
                status: 429,
            },
            UpstreamError::Decode {
                url: "http://h/e".to_string(),
                message: "expected value".to_string(),
            },
            UpstreamError::NotFound {
                id: "1".to_string(),
            },
            UpstreamError::InvalidId {
                id: "..".to_string(),
            },
            UpstreamError::Join("cancelled".to_string()),
        ]
    }

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            name: "John Doe".to_string(),
            salary: Some(50000),
            age: Some(30),
            title: "Engineer".to_string(),
            email: "john@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn every_failure_collapses_to_empty_or_absent() {
        for error in every_error_kind() {
            let gateway = failing(error.clone());
            assert!(gateway.fetch_all().await.is_empty(), "{error}");
            assert!(gateway.fetch_by_id("1").await.is_none(), "{error}");
            assert!(gateway.create(&draft()).await.is_none(), "{error}");
            assert_eq!(
                gateway.delete_by_id("1").await,
                DeleteOutcome::Failed,
                "{error}"
            );
        }
    }

    #[tokio::test]
    async fn successes_pass_through() {
        let gateway = EmployeeGateway::new(Arc::new(InMemoryUpstream::new()));
        let created = gateway.create(&draft()).await.unwrap();
        assert_eq!(gateway.fetch_all().await, vec![created.clone()]);
        assert_eq!(gateway.fetch_by_id(&created.id).await, Some(created.clone()));
        assert_eq!(
            gateway.delete_by_id(&created.id).await,
            DeleteOutcome::Deleted
        );
    }
}
