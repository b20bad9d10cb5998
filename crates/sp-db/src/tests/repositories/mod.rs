mod prediction_repository_tests;
mod role_repository_tests;
mod user_repository_tests;

use sqlx::{SqlitePool, migrate};

pub async fn setup_db() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
