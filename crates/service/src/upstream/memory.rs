//! In-memory transport: keeps employees in process instead of calling out.
//!
//! Backs the `--in-memory` demo mode and stands in for the upstream in tests:
//! creates are persisted so a later fetch by the returned id sees them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use roster_core::{Employee, EmployeeDraft};

use super::{EmployeeUpstream, UpstreamError};

/// Transport holding the employee collection in a `RwLock<Vec<_>>`.
///
/// Insertion order is the order `fetch_all` returns, mirroring an upstream
/// that lists records oldest first.
#[derive(Default)]
pub struct InMemoryUpstream {
    employees: RwLock<Vec<Employee>>,
    fetch_all_calls: AtomicUsize,
}

impl InMemoryUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport pre-populated with records (for testing).
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        InMemoryUpstream {
            employees: RwLock::new(employees),
            fetch_all_calls: AtomicUsize::new(0),
        }
    }

    /// Number of `fetch_all` round trips served so far.
    pub fn fetch_all_calls(&self) -> usize {
        self.fetch_all_calls.load(Ordering::SeqCst)
    }

    // Recover data even if the lock was poisoned by a panic in another thread
    fn read(&self) -> RwLockReadGuard<'_, Vec<Employee>> {
        self.employees.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Employee>> {
        self.employees.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl EmployeeUpstream for InMemoryUpstream {
    async fn fetch_all(&self) -> Result<Vec<Employee>, UpstreamError> {
        self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.read().clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Employee, UpstreamError> {
        self.read()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| UpstreamError::NotFound { id: id.to_string() })
    }

    async fn create(&self, draft: &EmployeeDraft) -> Result<Employee, UpstreamError> {
        let employee = Employee::from_draft(uuid::Uuid::new_v4().to_string(), draft.clone());
        self.write().push(employee.clone());
        Ok(employee)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), UpstreamError> {
        self.write().retain(|e| e.id != id);
        Ok(())
    }

    fn upstream_id(&self) -> &str {
        "memory"
    }
}
