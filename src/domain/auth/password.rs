//! Salted password hashing (Argon2id, PHC string format).
//!
//! Roster and admin credentials are stored only as PHC strings such as
//! `$argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>`.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use once_cell::sync::Lazy;

use super::errors::AuthError;

static PLACEHOLDER_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("digital-id placeholder credential").ok());

/// Hashes `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::service_unavailable(format!("password hashing failed: {}", e)))
}

/// Checks `password` against a stored PHC string.
///
/// Returns `Ok(false)` for a wrong password.
///
/// # Errors
///
/// `InvalidPasswordHash` if `phc` is not a parseable PHC string.
pub fn verify_password(password: &str, phc: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(phc).map_err(|e| AuthError::invalid_password_hash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// A real Argon2 hash of an unguessable placeholder, with the same
/// parameters as [`hash_password`].
///
/// Logins that match no credential are verified against it so that they
/// cost the same as a wrong password.
pub fn placeholder_password_hash() -> Option<&'static str> {
    PLACEHOLDER_HASH.as_deref()
}

/// Ensures `phc` parses as a PHC string.
pub fn validate_password_hash(phc: &str) -> Result<(), AuthError> {
    PasswordHash::new(phc)
        .map(|_| ())
        .map_err(|e| AuthError::invalid_password_hash(e.to_string()))
}
