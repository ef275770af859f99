//! Course creation, content upload and enrollment.

use super::common::CreateCourseRequest;
use crate::auth::AuthUser;
use crate::response::{ApiError, ApiResponse};
use crate::routes::common::read_upload_form;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use services::content_service::{ContentInput, ContentService};
use services::course_service::CourseService;
use services::enrollment_service::EnrollmentService;
use util::state::AppState;
use validator::Validate;

/// POST /api/courses
///
/// Creates a course owned by the caller. Publishers and admins only.
///
/// ### Request Body
/// ```json
/// { "title": "Rust", "description": "Ownership from scratch", "price": 49.5 }
/// ```
/// `publisherName` is optional and defaults to the caller's full name.
///
/// ### Responses
/// - `201 Created` with the course under `data`
/// - `400 Bad Request` when a field is missing or invalid
/// - `403 Forbidden` for plain users
pub async fn create_course(
    State(app_state): State<AppState>,
    user: AuthUser,
    Json(req): Json<CreateCourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if let Err(e) = req.validate() {
        return Err(ApiError::bad_request(common::format_validation_errors(&e)));
    }

    let course = CourseService::create(app_state.db(), &user.actor(), req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(course))))
}

/// POST /api/courses/{course_id}/content
///
/// Appends a content item from a multipart form with `title`, `youtube` and an
/// optional `file`. The file is uploaded and its URL stored as the item's content.
pub async fn upload_content(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    user: AuthUser,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = read_upload_form(multipart).await?;
    let input = ContentInput {
        title: form.text("title"),
        youtube: form.text("youtube"),
    };

    let result = ContentService::add(
        app_state.db(),
        app_state.uploader(),
        &user.actor(),
        course_id,
        input,
        form.file_path(),
    )
    .await;
    form.discard_file();

    Ok(Json(
        ApiResponse::success(result?).with_msg("successfully uploaded course content"),
    ))
}

/// POST /api/courses/{course_id}/enroll
///
/// Enrolls the caller. Responds with the updated course under `data` and the
/// caller, including `enrolledCourses`, under `user`.
pub async fn enroll(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = EnrollmentService::enroll(app_state.db(), user.0.sub, course_id).await?;
    Ok(Json(
        ApiResponse::success(outcome.course).with_extra("user", outcome.user),
    ))
}
