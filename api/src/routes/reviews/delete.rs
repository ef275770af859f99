use crate::auth::AuthUser;
use crate::response::{ApiError, ApiResponse, Empty};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use services::review_service::ReviewService;
use util::state::AppState;

/// DELETE /api/courses/{course_id}/reviews/{review_id}
pub async fn delete_review(
    State(app_state): State<AppState>,
    Path((course_id, review_id)): Path<(i64, i64)>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    ReviewService::delete(app_state.db(), &user.actor(), course_id, review_id).await?;
    Ok(Json(ApiResponse::success(Empty::default())))
}
