use crate::response::ApiResponse;
use axum::{Json, Router, response::IntoResponse, routing::get};

/// Routes mounted under `/health`.
pub fn health_routes() -> Router {
    Router::new().route("/", get(health_check))
}

/// GET /api/health
///
/// Liveness check. Touches nothing but the router, so a `200` only means
/// the process is accepting connections.
///
/// ```json
/// { "success": true, "data": "OK", "message": "Health check passed" }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Health check passed"))
}
