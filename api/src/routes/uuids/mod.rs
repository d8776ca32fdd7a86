//! # UUIDs Routes Module
//!
//! Routes for the `/api/uuids` endpoint group. Every handler takes its
//! identifiers as UUID path parameters and answers `400 Bad Request` when one
//! is malformed.
//!
//! ## Structure
//! - `get.rs` — GET handlers
//! - `common.rs` — response payloads

use axum::{Router, routing::get};
use get::{compare_uuids, describe_uuid};

pub mod common;
pub mod get;

/// Builds the `/uuids` route group.
///
/// - `GET /uuids/{id}` → `describe_uuid`
/// - `GET /uuids/{id}/compare/{other_id}` → `compare_uuids`
pub fn uuids_routes() -> Router {
    Router::new()
        .route("/{id}", get(describe_uuid))
        .route("/{id}/compare/{other_id}", get(compare_uuids))
}
