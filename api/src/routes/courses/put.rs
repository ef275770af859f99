use super::common::UpdateCourseRequest;
use crate::auth::AuthUser;
use crate::response::{ApiError, ApiResponse};
use crate::routes::common::read_upload_form;
use axum::{
    extract::{Multipart, Path, State},
    response::IntoResponse,
    Json,
};
use services::content_service::{ContentInput, ContentService};
use services::course_service::CourseService;
use util::state::AppState;
use validator::Validate;

/// PUT /api/courses/{course_id}
///
/// Partial update of `title`, `description`, `price` and `publisherName`.
/// Owner or admin; anyone else gets `400`.
pub async fn update_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    user: AuthUser,
    Json(req): Json<UpdateCourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(e) = req.validate() {
        return Err(ApiError::bad_request(common::format_validation_errors(&e)));
    }

    let course =
        CourseService::update(app_state.db(), &user.actor(), course_id, req.into()).await?;
    Ok(Json(ApiResponse::success(course)))
}

/// PUT /api/courses/{course_id}/content/{content_id}
///
/// Multipart form with `title`, `youtube` and an optional `file` that replaces
/// the item's content URL.
pub async fn update_content(
    State(app_state): State<AppState>,
    Path((course_id, content_id)): Path<(i64, i64)>,
    user: AuthUser,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = read_upload_form(multipart).await?;
    let input = ContentInput {
        title: form.text("title"),
        youtube: form.text("youtube"),
    };

    let result = ContentService::update(
        app_state.db(),
        app_state.uploader(),
        &user.actor(),
        course_id,
        content_id,
        input,
        form.file_path(),
    )
    .await;
    form.discard_file();

    Ok(Json(
        ApiResponse::success(result?).with_msg("content successfully updated"),
    ))
}

/// PUT /api/courses/{course_id}/image
///
/// Multipart form whose `file` becomes the course image. Missing file is `400`.
pub async fn upload_image(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    user: AuthUser,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = read_upload_form(multipart).await?;

    let result = CourseService::upload_image(
        app_state.db(),
        app_state.uploader(),
        &user.actor(),
        course_id,
        form.file_path(),
    )
    .await;
    form.discard_file();

    Ok(Json(
        ApiResponse::success(result?).with_msg("successfully uploaded course image"),
    ))
}
