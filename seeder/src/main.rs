use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    course::CourseSeeder, course_content::CourseContentSeeder, course_stats::CourseStatsSeeder,
    enrollment::EnrollmentSeeder, review::ReviewSeeder, user::UserSeeder,
};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = Migrator::up(&db, None).await {
        eprintln!("Failed to apply migrations: {e}");
        std::process::exit(1);
    }

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(CourseSeeder), "Course"),
        (Box::new(CourseContentSeeder), "CourseContent"),
        (Box::new(EnrollmentSeeder), "Enrollment"),
        (Box::new(ReviewSeeder), "Review"),
        (Box::new(CourseStatsSeeder), "CourseStats"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
