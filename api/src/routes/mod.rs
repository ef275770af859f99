//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe (public)
//! - `/courses` → catalogue, content, enrollment and stats
//! - `/courses/{course_id}/reviews` → course reviews

use crate::routes::{courses::courses_routes, health::health_routes};
use axum::Router;
use util::state::AppState;

pub mod common;
pub mod courses;
pub mod health;
pub mod reviews;

/// Builds the router for everything mounted under `/api`, with state applied.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/courses", courses_routes())
        .with_state(app_state)
}
