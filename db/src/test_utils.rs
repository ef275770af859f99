use crate::models::user::{self, Role};
use migration::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Fresh in-memory database with every migration applied.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Inserts a user whose names are derived from the email's local part.
pub async fn insert_user(db: &DatabaseConnection, email: &str, role: Role) -> user::Model {
    let local = email.split('@').next().unwrap_or(email);
    user::Model::create(db, local, "Tester", email, role)
        .await
        .expect("Failed to insert test user")
}
