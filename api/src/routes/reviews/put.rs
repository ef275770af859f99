use super::common::UpdateReviewRequest;
use crate::auth::AuthUser;
use crate::response::{ApiError, ApiResponse};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use services::review_service::ReviewService;
use util::state::AppState;
use validator::Validate;

/// PUT /api/courses/{course_id}/reviews/{review_id}
///
/// Author or admin only; other callers get `400`.
pub async fn update_review(
    State(app_state): State<AppState>,
    Path((course_id, review_id)): Path<(i64, i64)>,
    user: AuthUser,
    Json(req): Json<UpdateReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(e) = req.validate() {
        return Err(ApiError::bad_request(common::format_validation_errors(&e)));
    }

    let review = ReviewService::update(
        app_state.db(),
        &user.actor(),
        course_id,
        review_id,
        req.into(),
    )
    .await?;
    Ok(Json(ApiResponse::success(review)))
}
