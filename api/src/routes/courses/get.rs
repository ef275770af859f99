//! Read-only course endpoints.

use super::common::PublisherQuery;
use crate::response::{ApiError, ApiResponse};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use services::course_service::{CourseService, PUBLISHER_DEFAULT_LIMIT, PUBLISHER_DEFAULT_PAGE};
use services::stats_service::StatsService;
use util::{filters::ListQuery, state::AppState};

/// GET /api/courses
///
/// Filtered, sorted and paginated course listing.
///
/// ### Query Parameters
/// - `field=value`, `field[gt|gte|lt|lte|in]=value` filter on any course column
/// - `select=title,price` keeps only those fields (and `id`); `-field` drops one
/// - `sort=price,-createdAt` (default `-createdAt`)
/// - `page` (default 1), `limit` (default 100)
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "Total": 1,
///   "pagination": { "next": { "page": 2, "limit": 1 } },
///   "data": [ { "id": 1, "title": "Rust", "courseContent": [] } ]
/// }
/// ```
/// - `500 Internal Server Error` for unknown fields, operators or a negative window
pub async fn list_courses(
    State(app_state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListQuery::from_pairs(pairs).map_err(services::ServiceError::from)?;
    let listing = CourseService::list(app_state.db(), &query).await?;

    let total = listing.count();
    Ok(Json(
        ApiResponse::success(listing.data)
            .with_total(total)
            .with_pagination(listing.pagination),
    ))
}

/// GET /api/courses/{course_id}
///
/// A single course with its content and the publishing user under `publisher`.
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let (course, publisher) = CourseService::get(app_state.db(), course_id).await?;
    Ok(Json(ApiResponse::success(course).with_extra("publisher", publisher)))
}

/// GET /api/courses/publisher/{publisher_id}?page=&limit=
///
/// A publisher's courses in creation order (`page` default 1, `limit` default 10).
/// Responds `404` when the page is empty.
pub async fn list_publisher_courses(
    State(app_state): State<AppState>,
    Path(publisher_id): Path<i64>,
    Query(params): Query<PublisherQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let courses = CourseService::list_by_publisher(
        app_state.db(),
        publisher_id,
        params.page_or(PUBLISHER_DEFAULT_PAGE),
        params.limit_or(PUBLISHER_DEFAULT_LIMIT),
    )
    .await?;

    Ok(Json(ApiResponse::success(courses)))
}

/// GET /api/courses/stats/total-students
pub async fn total_students(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let total = StatsService::total_students(app_state.db()).await?;
    Ok(Json(ApiResponse::success(total)))
}
