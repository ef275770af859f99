use crate::ServiceError;
use db::models::{course, course_stats};
use sea_orm::{DatabaseConnection, DbErr};
use tracing::debug;

pub struct StatsService;

impl StatsService {
    /// Sum of `totalStudents` across every stats record.
    pub async fn total_students(db: &DatabaseConnection) -> Result<i64, ServiceError> {
        course_stats::Model::sum_total_students(db)
            .await?
            .ok_or_else(|| ServiceError::Internal("No course statistics have been recorded".into()))
    }

    /// Records a catalogue-wide snapshot of `numberOfStudents`. Does nothing
    /// when there are no courses.
    pub async fn refresh_snapshot(
        db: &DatabaseConnection,
    ) -> Result<Option<course_stats::Model>, DbErr> {
        let Some(total) = course::Model::sum_students(db).await? else {
            return Ok(None);
        };
        let snapshot = course_stats::Model::create(db, None, total).await?;
        debug!(total_students = total, "Recorded course stats snapshot");
        Ok(Some(snapshot))
    }
}
