use crate::seed::{SeedFuture, Seeder};
use db::models::{course, course_content};
use sea_orm::{DatabaseConnection, EntityTrait};

pub struct CourseContentSeeder;

impl Seeder for CourseContentSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            let courses = course::Entity::find().all(db).await?;

            for c in courses {
                for week in 1..=fastrand::usize(2..=5) {
                    let youtube = format!("https://youtu.be/{}", random_video_id());
                    // Every other week ships slides alongside the video.
                    let slides = (week % 2 == 1)
                        .then(|| format!("/media/coursecontent/course{}-week{week}.pdf", c.id));

                    course_content::Model::create(
                        db,
                        c.id,
                        &format!("Week {week}"),
                        Some(&youtube),
                        slides.as_deref(),
                    )
                    .await?;
                }
            }

            Ok(())
        })
    }
}

fn random_video_id() -> String {
    std::iter::repeat_with(fastrand::alphanumeric)
        .take(11)
        .collect()
}
