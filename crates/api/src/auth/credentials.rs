//! Credential service: registration, login, refresh, and token validation.
//!
//! Handlers and the seed routine go through [`CredentialService`] rather than
//! touching password hashes or token helpers directly.

use recipebox_core::error::CoreError;
use recipebox_core::users::{validate_username, MIN_PASSWORD_LENGTH};
use recipebox_db::models::user::{CreateUser, User};
use recipebox_db::repositories::UserRepo;
use recipebox_db::DbPool;
use serde::Serialize;

use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, hash_refresh_token, validate_token, Claims,
    JwtConfig,
};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{duplicate_on_conflict, AppError, AppResult};

/// Tokens handed back by a successful login or refresh.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedTokens {
    /// Signed access token (JWT).
    pub token: String,
    pub username: String,
    /// Opaque refresh token; only its digest is stored server-side.
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// Registers users and issues or validates their tokens.
#[derive(Debug, Clone, Copy)]
pub struct CredentialService<'a> {
    jwt: &'a JwtConfig,
}

impl<'a> CredentialService<'a> {
    pub fn new(jwt: &'a JwtConfig) -> Self {
        Self { jwt }
    }

    /// Create a new active user with an Argon2id-hashed password.
    ///
    /// Fails with [`CoreError::Duplicate`] if the username is taken, including
    /// when a concurrent registration wins the insert.
    pub async fn register(
        &self,
        pool: &DbPool,
        username: &str,
        password: &str,
    ) -> AppResult<User> {
        validate_username(username)?;
        validate_password_strength(password, MIN_PASSWORD_LENGTH)?;

        if UserRepo::find_by_username(pool, username).await?.is_some() {
            return Err(CoreError::duplicate("User", username).into());
        }

        let input = CreateUser {
            username: username.to_string(),
            password_hash: hash_password(password)?,
        };
        let user = UserRepo::create(pool, &input)
            .await
            .map_err(duplicate_on_conflict("User", username))?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Check a username/password pair and issue a fresh token pair.
    ///
    /// - Unknown username: [`CoreError::NotFound`].
    /// - Deactivated account: [`CoreError::Forbidden`].
    /// - Wrong password: [`CoreError::Unauthorized`].
    pub async fn authenticate(
        &self,
        pool: &DbPool,
        username: &str,
        password: &str,
    ) -> AppResult<IssuedTokens> {
        let user = UserRepo::find_by_username(pool, username)
            .await?
            .ok_or_else(|| CoreError::not_found("User", username))?;

        if !user.is_active {
            return Err(CoreError::Forbidden("Account is deactivated".into()).into());
        }

        if !verify_password(password, &user.password_hash)? {
            tracing::info!(username = %user.username, "Rejected login with invalid credentials");
            return Err(CoreError::Unauthorized("Invalid username or password".into()).into());
        }

        let (refresh_token, refresh_hash) = generate_refresh_token();
        UserRepo::set_refresh_token_hash(pool, user.id, Some(&refresh_hash)).await?;

        let tokens = self.issue(&user, refresh_token)?;
        tracing::info!(user_id = %user.id, "User logged in");
        Ok(tokens)
    }

    /// Exchange a refresh token for a new access + refresh token pair.
    ///
    /// The stored digest is rotated with a compare-and-swap, so a refresh
    /// token is accepted at most once even under concurrent use.
    pub async fn refresh(&self, pool: &DbPool, refresh_token: &str) -> AppResult<IssuedTokens> {
        let invalid = || -> AppError {
            CoreError::Unauthorized("Invalid or expired refresh token".into()).into()
        };

        let current_hash = hash_refresh_token(refresh_token);
        let user = UserRepo::find_by_refresh_token_hash(pool, &current_hash)
            .await?
            .ok_or_else(invalid)?;

        if !user.is_active {
            return Err(CoreError::Forbidden("Account is deactivated".into()).into());
        }

        let (new_token, new_hash) = generate_refresh_token();
        let rotated =
            UserRepo::rotate_refresh_token_hash(pool, user.id, &current_hash, &new_hash).await?;
        if !rotated {
            return Err(invalid());
        }

        self.issue(&user, new_token)
    }

    /// Validate an access token, returning its claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, CoreError> {
        validate_token(token, self.jwt)
            .map_err(|_| CoreError::Unauthorized("Invalid or expired token".into()))
    }

    fn issue(&self, user: &User, refresh_token: String) -> AppResult<IssuedTokens> {
        let token = generate_access_token(user.id, &user.username, self.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

        Ok(IssuedTokens {
            token,
            username: user.username.clone(),
            refresh_token,
            expires_in: self.jwt.expires_in_secs(),
        })
    }
}
