use crate::course_service::{CourseDocument, CourseService};
use crate::stats_service::StatsService;
use crate::ServiceError;
use db::models::{course, course_enrollment, course_stats, user};
use sea_orm::{DatabaseConnection, EntityTrait};
use serde::Serialize;
use tracing::{error, info};

/// A user as returned alongside an enrollment, with the ids of every
/// course they are enrolled in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: user::Model,
    pub enrolled_courses: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EnrollmentOutcome {
    pub course: CourseDocument,
    pub user: UserProfile,
}

pub struct EnrollmentService;

impl EnrollmentService {
    /// Enrolls `user_id` in `course_id`.
    ///
    /// The membership row, the course counter and the per-course stats row are
    /// separate writes. A catalogue snapshot is then recorded in the background;
    /// its failure is logged and never reaches the caller.
    pub async fn enroll(
        db: &DatabaseConnection,
        user_id: i64,
        course_id: i64,
    ) -> Result<EnrollmentOutcome, ServiceError> {
        CourseService::find(db, course_id).await?;
        let user = user::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::user_not_found(user_id))?;

        if course_enrollment::Model::exists(db, user.id, course_id).await? {
            return Err(ServiceError::Conflict(
                "you have already enrolled for this course".into(),
            ));
        }

        course_enrollment::Model::create(db, user.id, course_id).await?;
        course::Model::increment_students(db, course_id).await?;
        course_stats::Model::increment_for_course(db, course_id).await?;
        info!(user_id = user.id, course_id, "User enrolled");

        let background = db.clone();
        tokio::spawn(async move {
            if let Err(e) = StatsService::refresh_snapshot(&background).await {
                error!(error = %e, "Failed to refresh course stats");
            }
        });

        let course = CourseService::find(db, course_id).await?;
        let enrolled_courses = user.enrolled_course_ids(db).await?;

        Ok(EnrollmentOutcome {
            course: CourseDocument::load(db, course).await?,
            user: UserProfile {
                user,
                enrolled_courses,
            },
        })
    }
}
