use super::common::CreateReviewRequest;
use crate::auth::AuthUser;
use crate::response::{ApiError, ApiResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use services::review_service::ReviewService;
use util::state::AppState;
use validator::Validate;

/// POST /api/courses/{course_id}/reviews
///
/// ### Request Body
/// ```json
/// { "title": "Great course", "text": "Clear and well paced", "rating": 9 }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` on validation failure
/// - `404 Not Found` when the course does not exist
/// - `500` when the caller already reviewed this course
pub async fn create_review(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    user: AuthUser,
    Json(req): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(e) = req.validate() {
        return Err(ApiError::bad_request(common::format_validation_errors(&e)));
    }

    let review =
        ReviewService::create(app_state.db(), &user.actor(), course_id, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(review))))
}
