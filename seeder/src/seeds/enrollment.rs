use crate::seed::{SeedFuture, Seeder};
use db::models::{
    course, course_enrollment,
    user::{self, Role},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

pub struct EnrollmentSeeder;

impl Seeder for EnrollmentSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            let students = user::Entity::find()
                .filter(user::Column::Role.eq(Role::User))
                .all(db)
                .await?;
            let courses = course::Entity::find().all(db).await?;
            if courses.is_empty() {
                return Ok(());
            }

            for student in students {
                let mut picks = courses.clone();
                fastrand::shuffle(&mut picks);
                for c in picks.iter().take(fastrand::usize(0..=3)) {
                    course_enrollment::Model::create(db, student.id, c.id).await?;
                    course::Model::increment_students(db, c.id).await?;
                }
            }

            Ok(())
        })
    }
}
