use crate::response::ApiResponse;
use axum::{response::IntoResponse, routing::get, Json, Router};
use util::state::AppState;

/// Builds the `/health` route group.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /api/health
///
/// Liveness probe for load balancers and uptime checks.
///
/// ```json
/// { "success": true, "msg": "Health check passed", "data": "OK" }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK").with_msg("Health check passed"))
}
