use std::env;

use dotenvy::dotenv;

use feedback_service::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let app_env = env::var("APP_ENV").unwrap_or("local".to_string());

    let server_config = match ServerConfig::load(&app_env) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    feedback_service::run(server_config).await
}
