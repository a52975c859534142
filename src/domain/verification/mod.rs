//! Verification domain module - the QR payload integrity scheme.
//!
//! # Module Structure
//!
//! - `digest` - SHA-256 / rolling-hash primitives and tier policy
//! - `token` - Token type and JSON payload encoding
//! - `generator` - Derives a member's token from the shared secret
//! - `verifier` - Recomputes and compares presented tokens
//! - `result` - Outcome reported to the administrator
//! - `errors` - Verification error kinds

mod digest;
mod errors;
mod generator;
mod result;
mod token;
mod verifier;

pub use digest::{digests_match, rolling_hash_hex, sha256_hex, DigestPreference, DigestTier};
pub use errors::VerificationError;
pub use generator::{TokenGenerator, CANONICAL_DELIMITER};
pub use result::{VerificationData, VerificationResult, VerificationStatus};
pub use token::{MemberInfo, VerificationToken};
pub use verifier::TokenVerifier;
