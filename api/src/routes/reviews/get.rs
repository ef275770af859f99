use crate::response::{ApiError, ApiResponse};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use services::review_service::ReviewService;
use util::state::AppState;

/// GET /api/courses/{course_id}/reviews
///
/// Reviews of a course, newest first, with `Total` set to their count.
pub async fn list_reviews(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let reviews = ReviewService::list(app_state.db(), course_id).await?;
    let total = reviews.len();
    Ok(Json(ApiResponse::success(reviews).with_total(total)))
}

/// GET /api/courses/{course_id}/reviews/{review_id}
pub async fn get_review(
    State(app_state): State<AppState>,
    Path((course_id, review_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, ApiError> {
    let review = ReviewService::get(app_state.db(), course_id, review_id).await?;
    Ok(Json(ApiResponse::success(review)))
}
