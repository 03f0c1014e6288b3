//! Route handlers: translate requests to service calls and results to status
//! codes.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use roster_core::EmployeeDraft;

use super::json_error;
use super::state::AppState;

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    let response = serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });
    (StatusCode::OK, Json(response))
}

/// GET /api/employees
pub(crate) async fn handle_list(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let employees = state.service.list_all().await;
    (StatusCode::OK, Json(employees))
}

/// GET /api/employees/search/{query}
pub(crate) async fn handle_search(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
) -> impl IntoResponse {
    let employees = state.service.search_by_name(&query).await;
    (StatusCode::OK, Json(employees))
}

/// GET /api/employees/{id}
///
/// 404 whenever the service has no record, whether the employee does not
/// exist or the upstream could not be reached.
pub(crate) async fn handle_get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.service.get_by_id(&id).await {
        Some(employee) => (StatusCode::OK, Json(employee)).into_response(),
        None => json_error(
            StatusCode::NOT_FOUND,
            &format!("employee '{}' not found", id),
        )
        .into_response(),
    }
}

/// GET /api/employees/highestSalary
pub(crate) async fn handle_highest_salary(
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let salary = state.service.highest_salary().await;
    (StatusCode::OK, Json(salary))
}

/// GET /api/employees/topTenHighestEarningEmployeeNames
pub(crate) async fn handle_top_ten(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let names = state.service.top_ten_earner_names().await;
    (StatusCode::OK, Json(names))
}

/// POST /api/employees
pub(crate) async fn handle_create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<EmployeeDraft>, JsonRejection>,
) -> Response {
    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => {
            return json_error(StatusCode::BAD_REQUEST, &rejection.body_text()).into_response()
        }
    };

    match state.service.create(&draft).await {
        Some(employee) => (StatusCode::OK, Json(employee)).into_response(),
        None => json_error(StatusCode::BAD_REQUEST, "employee creation failed").into_response(),
    }
}

/// DELETE /api/employees/{id}
///
/// Always 200; the body is the outcome message.
pub(crate) async fn handle_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let outcome = state.service.delete_by_id(&id).await;
    (StatusCode::OK, Json(outcome.message()))
}
