//! Seed user accounts.
//!
//! Reads `SEED_USERS` (comma-separated usernames) and `SEED_PASSWORD`, applies
//! pending migrations, and creates any users that do not exist yet.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recipebox_api::auth::credentials::CredentialService;
use recipebox_api::auth::jwt::JwtConfig;
use recipebox_api::seed::{seed_users, SeedUser};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipebox_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let password = std::env::var("SEED_PASSWORD").expect("SEED_PASSWORD must be set");
    let users: Vec<SeedUser> = std::env::var("SEED_USERS")
        .expect("SEED_USERS must be set")
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|username| SeedUser {
            username: username.to_string(),
            password: password.clone(),
        })
        .collect();

    let jwt = JwtConfig::from_env();

    let pool = recipebox_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    recipebox_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let created = seed_users(&pool, &CredentialService::new(&jwt), &users)
        .await
        .expect("Seeding failed");

    tracing::info!(created, "Seed complete");
}
