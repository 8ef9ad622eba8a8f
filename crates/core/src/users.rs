//! Username rules applied at registration.

use crate::error::CoreError;

/// Maximum length of a username in characters.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Minimum length of a plaintext password at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a username: non-empty, bounded, and free of whitespace.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.is_empty() {
        return Err(CoreError::Validation("Username is required".to_string()));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Username exceeds maximum length of {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "Username must not contain whitespace".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_username_accepted() {
        assert!(validate_username("Bassel").is_ok());
    }

    #[test]
    fn empty_username_rejected() {
        assert!(validate_username("").is_err());
    }

    #[test]
    fn username_with_space_rejected() {
        assert!(validate_username("two words").is_err());
    }

    #[test]
    fn overlong_username_rejected() {
        let name = "u".repeat(MAX_USERNAME_LENGTH + 1);
        assert!(validate_username(&name).is_err());
    }
}
