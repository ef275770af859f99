//! # Courses Routes Module
//!
//! Defines and wires up routes for the `/api/courses` endpoint group.
//!
//! ## Structure
//! - `get.rs`: listing, detail, publisher listing, enrollment totals
//! - `post.rs`: create course, upload content, enroll
//! - `put.rs`: edit course, edit content, upload image
//! - `delete.rs`: delete course, delete content
//! - `common.rs`: request bodies and query parameters

use crate::auth::guards::{allow_authenticated, allow_publisher};
use crate::routes::reviews::reviews_routes;
use axum::{
    middleware::from_fn,
    routing::{delete, get, post, put},
    Router,
};
use delete::{delete_content, delete_course};
use get::{get_course, list_courses, list_publisher_courses, total_students};
use post::{create_course, enroll, upload_content};
use put::{update_content, update_course, upload_image};
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/courses` route group.
///
/// Routes:
/// - `GET    /courses`                                  → filtered listing
/// - `POST   /courses`                                  → create (publisher or admin)
/// - `GET    /courses/stats/total-students`             → enrollment total
/// - `GET    /courses/publisher/{publisher_id}`         → a publisher's courses
/// - `GET    /courses/{course_id}`                      → course detail
/// - `PUT    /courses/{course_id}`                      → edit (owner or admin)
/// - `DELETE /courses/{course_id}`                      → delete (owner or admin)
/// - `POST   /courses/{course_id}/content`              → add content item
/// - `PUT    /courses/{course_id}/content/{content_id}` → edit content item
/// - `DELETE /courses/{course_id}/content/{content_id}` → remove content item
/// - `PUT    /courses/{course_id}/image`                → upload cover image
/// - `POST   /courses/{course_id}/enroll`               → enroll the caller
///
/// Reviews are nested under `/courses/{course_id}/reviews`.
pub fn courses_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses))
        .route("/", post(create_course).route_layer(from_fn(allow_publisher)))
        .route("/stats/total-students", get(total_students))
        .route("/publisher/{publisher_id}", get(list_publisher_courses))
        .route("/{course_id}", get(get_course))
        .route("/{course_id}", put(update_course).route_layer(from_fn(allow_authenticated)))
        .route("/{course_id}", delete(delete_course).route_layer(from_fn(allow_authenticated)))
        .route("/{course_id}/content", post(upload_content).route_layer(from_fn(allow_authenticated)))
        .route(
            "/{course_id}/content/{content_id}",
            put(update_content).route_layer(from_fn(allow_authenticated)),
        )
        .route(
            "/{course_id}/content/{content_id}",
            delete(delete_content).route_layer(from_fn(allow_authenticated)),
        )
        .route("/{course_id}/image", put(upload_image).route_layer(from_fn(allow_authenticated)))
        .route("/{course_id}/enroll", post(enroll).route_layer(from_fn(allow_authenticated)))
        .nest("/{course_id}/reviews", reviews_routes())
}
