//! Authentication domain module.
//!
//! Passwords are only ever held as Argon2 PHC hashes.
//!
//! - `principal` - Member / admin identities
//! - `password` - Password hashing and verification
//! - `errors` - Authentication errors

mod errors;
mod password;
mod principal;

pub use errors::AuthError;
pub use password::{
    hash_password, placeholder_password_hash, validate_password_hash, verify_password,
};
pub use principal::{AdminAccount, AdminIdentity, Principal, ADMIN_ROLE};
