//! Explicit user seeding, run by the `recipebox-seed` binary.

use recipebox_db::repositories::UserRepo;
use recipebox_db::DbPool;

use crate::auth::credentials::CredentialService;
use crate::error::AppResult;

/// A user to create if the username is still free.
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
}

/// Register each seed user through the credential service, skipping
/// usernames that already exist. Returns the number of users created.
pub async fn seed_users(
    pool: &DbPool,
    credentials: &CredentialService<'_>,
    users: &[SeedUser],
) -> AppResult<usize> {
    let mut created = 0;

    for seed in users {
        if UserRepo::find_by_username(pool, &seed.username).await?.is_some() {
            tracing::debug!(username = %seed.username, "Seed user already exists, skipping");
            continue;
        }

        credentials
            .register(pool, &seed.username, &seed.password)
            .await?;
        created += 1;
    }

    tracing::info!(created, total = users.len(), "User seeding finished");
    Ok(created)
}
