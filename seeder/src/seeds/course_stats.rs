use crate::seed::{SeedFuture, Seeder};
use db::models::{course, course_stats};
use sea_orm::{DatabaseConnection, EntityTrait};
use services::stats_service::StatsService;

/// One stats row per course matching its current counter, then a catalogue snapshot.
pub struct CourseStatsSeeder;

impl Seeder for CourseStatsSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            for c in course::Entity::find().all(db).await? {
                course_stats::Model::create(db, Some(c.id), c.number_of_students).await?;
            }
            StatsService::refresh_snapshot(db).await?;
            Ok(())
        })
    }
}
