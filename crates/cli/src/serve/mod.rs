//! `roster serve` -- HTTP JSON façade over the upstream employee API.
//!
//! Exposes [`EmployeeService`] as an async HTTP service using `axum` +
//! `tokio`. Every request is one independent call chain; the only shared
//! resource is the upstream transport inside the service.
//!
//! Endpoints:
//! - GET    /health                                          - Server status
//! - GET    /api/employees                                   - All employees
//! - GET    /api/employees/search/{query}                    - Name substring search
//! - GET    /api/employees/highestSalary                     - Highest salary
//! - GET    /api/employees/topTenHighestEarningEmployeeNames - Top ten earner names
//! - GET    /api/employees/{id}                              - One employee (404 if absent)
//! - POST   /api/employees                                   - Create (400 on failure)
//! - DELETE /api/employees/{id}                              - Delete (outcome message)
//!
//! All responses use Content-Type: application/json.

mod handlers;
mod state;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use roster_service::EmployeeService;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use self::handlers::{
    handle_create, handle_delete, handle_get, handle_health, handle_highest_salary, handle_list,
    handle_not_found, handle_search, handle_top_ten,
};
use self::state::AppState;

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

/// Build the router over a service. Static segments take priority over
/// `{id}`, so `/highestSalary` never reaches the fetch-by-id handler.
pub(crate) fn router(service: EmployeeService) -> Router {
    let state = Arc::new(AppState { service });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/api/employees", get(handle_list).post(handle_create))
        .route("/api/employees/search/{query}", get(handle_search))
        .route("/api/employees/highestSalary", get(handle_highest_salary))
        .route(
            "/api/employees/topTenHighestEarningEmployeeNames",
            get(handle_top_ten),
        )
        .route("/api/employees/{id}", get(handle_get).delete(handle_delete))
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server on the given port.
pub async fn start_server(
    port: u16,
    service: EmployeeService,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(service);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Roster listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
