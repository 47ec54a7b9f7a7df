//! Helpers for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use feedback_service::db::{DbPool, establish_connection_pool};
use feedback_service::domain::feedback::NewFeedback;
use feedback_service::domain::types::{CustomerId, ProductId, Rating};
use feedback_service::repository::{DieselRepository, FeedbackWriter};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests. The file lives in its own
/// directory, removed together with the WAL files on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let database_url = path.to_str().expect("Temporary path is not UTF-8.");

        let pool = establish_connection_pool(database_url)
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb { _dir: dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

pub fn new_feedback(customer_id: i32, product_id: i32, rating: i32, comment: &str) -> NewFeedback {
    let mut feedback = NewFeedback::new(
        CustomerId::new(customer_id).unwrap(),
        ProductId::new(product_id).unwrap(),
        Rating::new(rating).unwrap(),
        Some(comment.to_string()),
    );
    feedback.created_at = NaiveDate::from_ymd_opt(2024, 10, 20)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    feedback
}

/// Insert the three-record fixture: ratings 5, 4 and 3.
pub fn seed(repo: &DieselRepository) {
    let inserted = repo
        .create_feedbacks(&[
            new_feedback(1, 1, 5, "Great product!"),
            new_feedback(2, 2, 4, "Good product!"),
            new_feedback(3, 1, 3, "Average product!"),
        ])
        .unwrap();
    assert_eq!(inserted, 3);
}
