use crate::seed::{SeedFuture, Seeder};
use db::models::{
    course,
    user::{self, Role},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

const TOPICS: [&str; 10] = [
    "Rust Fundamentals",
    "Async Rust with Tokio",
    "Web APIs with Axum",
    "Databases with SeaORM",
    "Systems Programming",
    "Embedded Rust",
    "WebAssembly in Practice",
    "Concurrency Patterns",
    "Macros and Metaprogramming",
    "Testing Rust Services",
];

pub struct CourseSeeder;

impl Seeder for CourseSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            let publishers = user::Entity::find()
                .filter(user::Column::Role.eq(Role::Publisher))
                .all(db)
                .await?;
            if publishers.is_empty() {
                return Ok(());
            }

            for (i, topic) in TOPICS.iter().enumerate() {
                let publisher = &publishers[i % publishers.len()];
                let level = ["Beginner", "Intermediate", "Advanced"][fastrand::usize(..3)];
                let description = format!("{level} course covering {}.", topic.to_lowercase());
                let price = (fastrand::u32(5..=120) as f64) - 0.01;

                course::Model::create(
                    db,
                    publisher.id,
                    &publisher.full_name(),
                    topic,
                    &description,
                    price,
                )
                .await?;
            }

            Ok(())
        })
    }
}
