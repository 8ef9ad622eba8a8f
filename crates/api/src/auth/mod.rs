//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation, validation, and refresh-token helpers.
//! - [`credentials`] -- Registration, login, and token refresh built on the two above.

pub mod credentials;
pub mod jwt;
pub mod password;
