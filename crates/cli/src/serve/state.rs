//! Application state.

use roster_service::EmployeeService;

/// Application state shared across request handlers.
pub(crate) struct AppState {
    /// Service over the configured upstream. Holds no per-request state.
    pub(crate) service: EmployeeService,
}
