//! Repository for the `users` table.

use recipebox_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password, refresh_token, is_active, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new active user with a freshly generated id, returning the created row.
    ///
    /// A taken username surfaces as a `uq_users_username` unique violation.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, username, password, is_active)
             VALUES ($1, $2, $3, true)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.username)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find the user whose stored refresh-token digest equals `token_hash`.
    pub async fn find_by_refresh_token_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE refresh_token = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Store (or clear, with `None`) the refresh-token digest for a user.
    ///
    /// Returns `true` if the row was updated.
    pub async fn set_refresh_token_hash(
        pool: &PgPool,
        id: DbId,
        token_hash: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET refresh_token = $2 WHERE id = $1")
            .bind(id)
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Swap the refresh-token digest only if it still equals `current_hash`.
    ///
    /// Returns `false` when another request rotated the token first.
    pub async fn rotate_refresh_token_hash(
        pool: &PgPool,
        id: DbId,
        current_hash: &str,
        new_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE users SET refresh_token = $3 WHERE id = $1 AND refresh_token = $2")
                .bind(id)
                .bind(current_hash)
                .bind(new_hash)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
