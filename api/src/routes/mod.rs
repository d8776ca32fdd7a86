//! HTTP route entry point for `/api/...`.
//!
//! Route groups include:
//! - `/health` → Health check endpoint
//! - `/uuids` → Endpoints keyed by UUID path parameters

use crate::routes::{health::health_routes, uuids::uuids_routes};
use axum::Router;

pub mod health;
pub mod uuids;

/// Builds the complete application router for all HTTP endpoints.
///
/// # Route Structure:
/// - `/health` → Health check endpoint.
/// - `/uuids/{id}` → Describe a single UUID.
/// - `/uuids/{id}/compare/{other_id}` → Compare two UUIDs.
pub fn routes() -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/uuids", uuids_routes())
}
