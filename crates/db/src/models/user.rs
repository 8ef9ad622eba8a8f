//! User entity model and DTOs.

use recipebox_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash and refresh-token digest -- NEVER serialize this
/// to API responses directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    /// Argon2id PHC string, stored in the `password` column.
    #[sqlx(rename = "password")]
    pub password_hash: String,
    /// SHA-256 hex digest of the most recently issued refresh token.
    #[sqlx(rename = "refresh_token")]
    pub refresh_token_hash: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no secrets).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// DTO for inserting a new user. The password must already be hashed.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
}
