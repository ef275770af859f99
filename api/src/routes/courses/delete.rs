use crate::auth::AuthUser;
use crate::response::{ApiError, ApiResponse, Empty};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use services::content_service::ContentService;
use services::course_service::CourseService;
use util::state::AppState;

/// DELETE /api/courses/{course_id}
///
/// Removes the course with its content, enrollments and reviews. Responds `data: {}`.
pub async fn delete_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    CourseService::delete(app_state.db(), &user.actor(), course_id).await?;
    Ok(Json(ApiResponse::success(Empty::default())))
}

/// DELETE /api/courses/{course_id}/content/{content_id}
pub async fn delete_content(
    State(app_state): State<AppState>,
    Path((course_id, content_id)): Path<(i64, i64)>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let course =
        ContentService::remove(app_state.db(), &user.actor(), course_id, content_id).await?;
    Ok(Json(
        ApiResponse::success(course).with_msg("content successfully deleted"),
    ))
}
