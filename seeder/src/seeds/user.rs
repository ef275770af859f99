use crate::seed::{SeedFuture, Seeder};
use db::models::user::{Model, Role};
use fake::{
    Fake,
    faker::name::en::{FirstName, LastName},
};
use sea_orm::DatabaseConnection;

pub struct UserSeeder;

impl Seeder for UserSeeder {
    fn seed<'a>(&'a self, db: &'a DatabaseConnection) -> SeedFuture<'a> {
        Box::pin(async move {
            // Fixed accounts
            Model::create(db, "Ada", "Admin", "admin@example.com", Role::Admin).await?;
            Model::create(db, "Pat", "Publisher", "publisher@example.com", Role::Publisher).await?;
            Model::create(db, "Uma", "User", "user@example.com", Role::User).await?;

            for i in 0..4 {
                let first: String = FirstName().fake();
                let last: String = LastName().fake();
                let email = format!("publisher{i}@example.com");
                Model::create(db, &first, &last, &email, Role::Publisher).await?;
            }

            for i in 0..20 {
                let first: String = FirstName().fake();
                let last: String = LastName().fake();
                let email = format!("student{i}@example.com");
                Model::create(db, &first, &last, &email, Role::User).await?;
            }

            Ok(())
        })
    }
}
