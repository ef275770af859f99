//! Request bodies and query parameters for the `/courses` routes.

use serde::Deserialize;
use services::course_service::CreateCourse;
use db::models::course::CourseChanges;
use util::filters::parse_int_prefix;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please add a course title"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please add a description"))]
    pub description: String,

    #[validate(
        required(message = "Please add a price"),
        range(min = 0.0, message = "Price cannot be negative")
    )]
    pub price: Option<f64>,

    pub publisher_name: Option<String>,
}

impl From<CreateCourseRequest> for CreateCourse {
    fn from(req: CreateCourseRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price: req.price.unwrap_or_default(),
            publisher_name: req.publisher_name.filter(|n| !n.trim().is_empty()),
        }
    }
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, message = "Course title cannot be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,

    #[validate(length(min = 1, message = "Publisher name cannot be empty"))]
    pub publisher_name: Option<String>,
}

impl From<UpdateCourseRequest> for CourseChanges {
    fn from(req: UpdateCourseRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price: req.price,
            publisher_name: req.publisher_name,
        }
    }
}

/// `?page=&limit=` on the publisher listing. Raw strings so that `"2abc"`
/// and `"0"` follow the same rules as the general listing.
#[derive(Debug, Default, Deserialize)]
pub struct PublisherQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PublisherQuery {
    pub fn page_or(&self, default: i64) -> i64 {
        int_param(self.page.as_deref(), default)
    }

    pub fn limit_or(&self, default: i64) -> i64 {
        int_param(self.limit.as_deref(), default)
    }
}

fn int_param(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(parse_int_prefix)
        .filter(|v| *v != 0)
        .unwrap_or(default)
}
