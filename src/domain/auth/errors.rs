//! Authentication errors.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Authentication and authorization errors.
///
/// These are domain-centric; no credential store details leak through them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown login or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The member exists but is marked inactive.
    #[error("Account inactive")]
    AccountInactive,

    /// No one is logged in.
    #[error("Not logged in")]
    NotAuthenticated,

    /// Logged in, but not with the required role.
    #[error("Insufficient permissions: {0} access required")]
    Forbidden(&'static str),

    /// A stored password hash could not be parsed.
    #[error("Invalid password hash: {0}")]
    InvalidPasswordHash(String),

    /// Credential or session storage failed.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    pub fn invalid_password_hash(message: impl Into<String>) -> Self {
        Self::InvalidPasswordHash(message.into())
    }

    /// Returns true if the user should log in (again).
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::NotAuthenticated | AuthError::InvalidCredentials)
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AuthError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AuthError::AccountInactive => ErrorCode::AccountInactive,
            AuthError::NotAuthenticated => ErrorCode::Unauthorized,
            AuthError::Forbidden(_) => ErrorCode::Forbidden,
            AuthError::InvalidPasswordHash(_) => ErrorCode::InternalError,
            AuthError::ServiceUnavailable(_) => ErrorCode::StorageError,
        }
    }
}
