//! Digest primitives and the tier selection policy.
//!
//! Two tiers exist:
//!
//! - **Secure**: SHA-256 rendered as 64 lowercase hex characters.
//! - **Fallback**: a 32-bit rolling hash over UTF-16 code units, rendered as
//!   lowercase hex padded to 8 digits. Offers no cryptographic protection and
//!   only exists for clients that cannot run SHA-256.
//!
//! The active tier is resolved once from configuration with
//! [`DigestPreference::resolve`] and then handed to both the generator and
//! the verifier. It is never re-detected per call, so the two sides cannot
//! silently disagree.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use super::errors::VerificationError;

/// Which digest primitive is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestTier {
    Secure,
    Fallback,
}

impl DigestTier {
    /// Digest `input` with this tier's primitive.
    pub fn digest(&self, input: &str) -> String {
        match self {
            DigestTier::Secure => sha256_hex(input),
            DigestTier::Fallback => rolling_hash_hex(input),
        }
    }

    /// True when the tier provides no cryptographic guarantee.
    pub fn is_degraded(&self) -> bool {
        matches!(self, DigestTier::Fallback)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DigestTier::Secure => "secure",
            DigestTier::Fallback => "fallback",
        }
    }
}

impl fmt::Display for DigestTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured digest preference, resolved once at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestPreference {
    /// Require SHA-256; fail if the secure primitive is unavailable.
    Secure,
    /// Always use the rolling hash.
    Fallback,
    /// SHA-256 when available, otherwise the rolling hash.
    #[default]
    Auto,
}

impl DigestPreference {
    /// Resolves the preference into the tier used for the whole process.
    ///
    /// # Errors
    ///
    /// `DigestUnavailable` when `Secure` is required but the secure
    /// primitive is not available.
    pub fn resolve(self, secure_available: bool) -> Result<DigestTier, VerificationError> {
        let tier = match (self, secure_available) {
            (DigestPreference::Secure, true) | (DigestPreference::Auto, true) => DigestTier::Secure,
            (DigestPreference::Secure, false) => {
                return Err(VerificationError::digest_unavailable(
                    "secure digest required but no secure context is available",
                ));
            }
            (DigestPreference::Auto, false) | (DigestPreference::Fallback, _) => DigestTier::Fallback,
        };

        Ok(tier)
    }
}

/// SHA-256 of `input`, lowercase hex.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// 32-bit rolling hash of `input`, lowercase hex padded to 8 digits.
///
/// `h = h * 31 + c` over UTF-16 code units in wrapping `i32` arithmetic;
/// the absolute value is rendered (so `i32::MIN` becomes `80000000`).
/// Empty input renders as `"0"`.
pub fn rolling_hash_hex(input: &str) -> String {
    if input.is_empty() {
        return "0".to_string();
    }

    let hash = input.encode_utf16().fold(0i32, |h, c| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(c))
    });

    format!("{:08x}", hash.unsigned_abs())
}

/// Exact, case-sensitive digest equality evaluated in constant time.
pub fn digests_match(provided: &str, expected: &str) -> bool {
    let (a, b) = (provided.as_bytes(), expected.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
