pub mod extract;
pub mod middleware;
pub mod response;
pub mod routes;

use axum::{Router, middleware::from_fn};
use tower_http::cors::CorsLayer;

/// The full application: every route group under `/api`, with request
/// logging and permissive CORS.
pub fn app() -> Router {
    Router::new()
        .nest("/api", routes::routes())
        .layer(from_fn(middleware::log_request))
        .layer(CorsLayer::very_permissive())
}
