use crate::seed::{SeedFuture, Seeder};
use db::models::{course_enrollment, review};
use fake::{Fake, faker::lorem::en::Sentence};
use sea_orm::{DatabaseConnection, EntityTrait};

const TITLES: [&str; 6] = [
    "Exactly what I needed",
    "Great pacing",
    "Solid introduction",
    "Too fast in places",
    "Excellent exercises",
    "Would recommend",
];

/// Roughly half of the enrolled students leave a review.
pub struct ReviewSeeder;

impl Seeder for ReviewSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            let enrollments = course_enrollment::Entity::find().all(db).await?;

            for enrollment in enrollments.into_iter().filter(|_| fastrand::bool()) {
                let title = TITLES[fastrand::usize(..TITLES.len())];
                let text: String = Sentence(6..14).fake();
                review::Model::create(
                    db,
                    enrollment.course_id,
                    enrollment.user_id,
                    title,
                    &text,
                    fastrand::i32(1..=10),
                )
                .await?;
            }

            Ok(())
        })
    }
}
