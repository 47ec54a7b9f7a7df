//! Fill the feedback table with random records for local development.
//!
//! Usage: `seed_feedbacks [COUNT]` (defaults to 10).

use std::env;

use chrono::{Duration, Utc};
use dotenvy::dotenv;
use rand::Rng;
use rand::seq::IndexedRandom;

use feedback_service::db::establish_connection_pool;
use feedback_service::domain::feedback::NewFeedback;
use feedback_service::domain::types::{CustomerId, MAX_RATING, MIN_RATING, ProductId, Rating};
use feedback_service::models::config::ServerConfig;
use feedback_service::repository::{DieselRepository, FeedbackWriter};

const DEFAULT_COUNT: i32 = 10;

const WORDS: &[&str] = &[
    "quality", "delivery", "price", "product", "support", "great", "good", "average", "poor",
    "fast", "slow", "packaging", "value", "would", "recommend", "again", "works", "broken",
    "excellent", "expected", "arrived", "late", "perfect", "cheap", "sturdy",
];

fn random_sentence(rng: &mut impl Rng) -> String {
    let length = rng.random_range(4..=10);
    let mut sentence = (0..length)
        .filter_map(|_| WORDS.choose(&mut *rng).copied())
        .collect::<Vec<_>>()
        .join(" ");

    if let Some(first) = sentence.get(..1).map(str::to_uppercase) {
        sentence.replace_range(..1, &first);
    }
    sentence.push('.');
    sentence
}

fn random_feedbacks(count: i32) -> Vec<NewFeedback> {
    let mut rng = rand::rng();
    let now = Utc::now().naive_utc();

    (1..=count)
        .filter_map(|n| {
            let customer_id = CustomerId::new(n).ok()?;
            let product_id = ProductId::new(n).ok()?;
            let rating = Rating::new(rng.random_range(MIN_RATING..=MAX_RATING)).ok()?;

            let mut feedback = NewFeedback::new(
                customer_id,
                product_id,
                rating,
                Some(random_sentence(&mut rng)),
            );
            feedback.created_at = now - Duration::days(rng.random_range(0..365));
            Some(feedback)
        })
        .collect()
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let count = match env::args().nth(1).map(|arg| arg.parse::<i32>()) {
        None => DEFAULT_COUNT,
        Some(Ok(count)) if count > 0 => count,
        Some(_) => {
            log::error!("COUNT must be a positive integer");
            std::process::exit(1);
        }
    };

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let server_config = match ServerConfig::load(&app_env) {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    match repo.create_feedbacks(&random_feedbacks(count)) {
        Ok(inserted) => log::info!("Inserted {inserted} feedback records"),
        Err(e) => {
            log::error!("Failed to seed feedback records: {e}");
            std::process::exit(1);
        }
    }
}
