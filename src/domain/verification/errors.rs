//! Verification error types.
//!
//! Every error here is recovered at the verifier boundary and reported
//! inside a [`super::VerificationResult`]; none of them escape to callers.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;

/// Reasons a presented payload fails verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Payload is not a well-formed token.
    #[error("Invalid QR code format: {0}")]
    InvalidFormat(String),

    /// The claimed member id is not on the roster.
    #[error("Member not found: {0}")]
    MemberNotFound(String),

    /// Recomputed digest differs from the presented one.
    #[error("Digest mismatch")]
    DigestMismatch {
        provided: String,
        /// Only populated when expected-digest disclosure is enabled.
        expected: Option<String>,
    },

    /// No digest primitive could be used.
    #[error("Digest unavailable: {0}")]
    DigestUnavailable(String),

    /// The roster could not be consulted.
    #[error("Roster unavailable: {0}")]
    RosterUnavailable(String),
}

impl VerificationError {
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        VerificationError::InvalidFormat(reason.into())
    }

    pub fn member_not_found(id: impl Into<String>) -> Self {
        VerificationError::MemberNotFound(id.into())
    }

    pub fn digest_mismatch(provided: impl Into<String>, expected: Option<String>) -> Self {
        VerificationError::DigestMismatch {
            provided: provided.into(),
            expected,
        }
    }

    pub fn digest_unavailable(reason: impl Into<String>) -> Self {
        VerificationError::DigestUnavailable(reason.into())
    }

    pub fn roster_unavailable(reason: impl Into<String>) -> Self {
        VerificationError::RosterUnavailable(reason.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            VerificationError::InvalidFormat(_) => ErrorCode::InvalidFormat,
            VerificationError::MemberNotFound(_) => ErrorCode::MemberNotFound,
            VerificationError::DigestMismatch { .. } => ErrorCode::DigestMismatch,
            VerificationError::DigestUnavailable(_) => ErrorCode::DigestUnavailable,
            VerificationError::RosterUnavailable(_) => ErrorCode::InternalError,
        }
    }

    /// Message shown to the administrator.
    pub fn user_message(&self) -> &'static str {
        match self {
            VerificationError::InvalidFormat(_) => "Invalid QR code format",
            VerificationError::MemberNotFound(_) => "Member not found",
            VerificationError::DigestMismatch { .. } => {
                "QR code verification failed - Invalid hash"
            }
            VerificationError::DigestUnavailable(_) => "QR code verification unavailable",
            VerificationError::RosterUnavailable(_) => "Member roster unavailable",
        }
    }
}
