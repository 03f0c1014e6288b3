//! Employee operations exposed to the routing layer.

use std::sync::Arc;

use roster_core::{aggregate, DeleteOutcome, Employee, EmployeeDraft};

use crate::gateway::EmployeeGateway;
use crate::upstream::EmployeeUpstream;

/// Stateless service over the upstream employee API.
///
/// Each operation performs at most one upstream round trip and works on its
/// own snapshot of the collection. Clones share the underlying transport.
#[derive(Clone)]
pub struct EmployeeService {
    gateway: EmployeeGateway,
}

impl EmployeeService {
    pub fn new(upstream: Arc<dyn EmployeeUpstream>) -> Self {
        Self::with_gateway(EmployeeGateway::new(upstream))
    }

    pub fn with_gateway(gateway: EmployeeGateway) -> Self {
        EmployeeService { gateway }
    }

    pub async fn list_all(&self) -> Vec<Employee> {
        self.gateway.fetch_all().await
    }

    /// Employees whose name contains `query`, ignoring case.
    pub async fn search_by_name(&self, query: &str) -> Vec<Employee> {
        let employees = self.gateway.fetch_all().await;
        aggregate::filter_by_name(employees, query)
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Employee> {
        self.gateway.fetch_by_id(id).await
    }

    /// Highest salary on record; `0` when there is nothing to compare.
    pub async fn highest_salary(&self) -> u64 {
        let employees = self.gateway.fetch_all().await;
        aggregate::highest_salary(&employees)
    }

    pub async fn top_ten_earner_names(&self) -> Vec<String> {
        let employees = self.gateway.fetch_all().await;
        aggregate::top_earner_names(&employees, aggregate::TOP_EARNER_LIMIT)
    }

    pub async fn create(&self, draft: &EmployeeDraft) -> Option<Employee> {
        let created = self.gateway.create(draft).await;
        if let Some(ref employee) = created {
            tracing::info!(id = %employee.id, "employee created");
        }
        created
    }

    pub async fn delete_by_id(&self, id: &str) -> DeleteOutcome {
        let outcome = self.gateway.delete_by_id(id).await;
        tracing::info!(%id, outcome = %outcome, "employee delete requested");
        outcome
    }
}
