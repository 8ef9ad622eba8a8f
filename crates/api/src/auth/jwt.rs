//! Bearer-token issuance and validation, plus refresh-token helpers.
//!
//! Access tokens are HS512-signed JWTs carrying a [`Claims`] payload with the
//! username as subject. Refresh tokens are opaque random strings; only their
//! SHA-256 digest is stored on the user row.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use recipebox_core::types::DbId;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::env_or;

/// Signing algorithm for every access token.
const ALGORITHM: Algorithm = Algorithm::HS512;

/// Default access token lifetime in hours.
const DEFAULT_EXPIRY_HOURS: i64 = 6;

/// Longest accepted access token lifetime in hours (one year).
const MAX_EXPIRY_HOURS: i64 = 24 * 365;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the username.
    pub sub: String,
    /// The user's internal id.
    pub id: DbId,
    /// Unique token identifier (UUID v4).
    pub jti: String,
    pub iss: String,
    pub aud: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Symmetric key used to sign and verify tokens.
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    /// Access token lifetime in hours.
    pub expiry_hours: i64,
    /// Reject tokens past their `exp`. Disabling this is an explicit opt-in.
    pub validate_expiry: bool,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var               | Required | Default             |
    /// |-----------------------|----------|---------------------|
    /// | `JWT_SECRET`          | **yes**  | --                  |
    /// | `JWT_ISSUER`          | no       | `recipebox`         |
    /// | `JWT_AUDIENCE`        | no       | `recipebox-clients` |
    /// | `JWT_EXPIRY_HOURS`    | no       | `6`                 |
    /// | `JWT_VALIDATE_EXPIRY` | no       | `true`              |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty, or if `JWT_EXPIRY_HOURS`
    /// is outside `1..=8760`.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let validate_expiry: bool = env_or("JWT_VALIDATE_EXPIRY", true);
        if !validate_expiry {
            tracing::warn!("JWT expiry validation is disabled; expired tokens will be accepted");
        }

        let expiry_hours = env_or("JWT_EXPIRY_HOURS", DEFAULT_EXPIRY_HOURS);
        let expiry_hours = checked_expiry_hours(expiry_hours)
            .unwrap_or_else(|e| panic!("JWT_EXPIRY_HOURS {e}"));

        Self {
            secret,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "recipebox".into()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "recipebox-clients".into()),
            expiry_hours,
            validate_expiry,
        }
    }

    /// Access token lifetime in seconds.
    pub fn expires_in_secs(&self) -> i64 {
        self.expiry_hours * 3600
    }
}

/// Accept a token lifetime only if it is positive and at most
/// [`MAX_EXPIRY_HOURS`], which keeps `exp` arithmetic far from overflow.
fn checked_expiry_hours(hours: i64) -> Result<i64, String> {
    if (1..=MAX_EXPIRY_HOURS).contains(&hours) {
        Ok(hours)
    } else {
        Err(format!("must be between 1 and {MAX_EXPIRY_HOURS}, got {hours}"))
    }
}

/// Generate an HS512 access token for the given user.
pub fn generate_access_token(
    user_id: DbId,
    username: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: username.to_string(),
        id: user_id,
        jti: Uuid::new_v4().to_string(),
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        iat: now,
        exp: now + config.expires_in_secs(),
    };

    encode(
        &Header::new(ALGORITHM),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Signature, issuer, and audience are always checked; expiry is checked
/// unless `config.validate_expiry` is off.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(ALGORITHM);
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);
    validation.validate_exp = config.validate_expiry;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}

/// Generate a random refresh token.
///
/// Returns `(plaintext_token, sha256_hex_hash)`. The plaintext goes to the
/// client; only the hash is persisted.
pub fn generate_refresh_token() -> (String, String) {
    let plaintext = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    let hash = hash_refresh_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a refresh token.
pub fn hash_refresh_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
