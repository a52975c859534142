//! Token verifier - recomputes and compares a presented token's digest.
//!
//! Roster lookup happens in the application layer; this type only decides
//! whether a decoded token is genuine for an already-resolved member.

use std::sync::Arc;

use crate::domain::member::Member;

use super::digest::digests_match;
use super::errors::VerificationError;
use super::generator::TokenGenerator;
use super::token::VerificationToken;

/// Compares presented tokens against freshly generated ones.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    generator: Arc<TokenGenerator>,
    disclose_expected_digest: bool,
}

impl TokenVerifier {
    /// Creates a verifier sharing the generator (and therefore the secret
    /// and digest tier) used to issue tokens.
    pub fn new(generator: Arc<TokenGenerator>) -> Self {
        Self {
            generator,
            disclose_expected_digest: true,
        }
    }

    /// Controls whether mismatch errors carry the expected digest.
    pub fn with_expected_digest_disclosure(mut self, disclose: bool) -> Self {
        self.disclose_expected_digest = disclose;
        self
    }

    pub fn generator(&self) -> &TokenGenerator {
        &self.generator
    }

    /// Checks `token` against the roster record `member`.
    ///
    /// # Errors
    ///
    /// `DigestMismatch` when the recomputed digest differs from the
    /// presented one.
    pub fn check(&self, token: &VerificationToken, member: &Member) -> Result<(), VerificationError> {
        let expected = self.generator.generate(member);

        if digests_match(&token.hash, &expected.hash) {
            return Ok(());
        }

        let expected_hash = self.disclose_expected_digest.then_some(expected.hash);
        Err(VerificationError::digest_mismatch(token.hash.clone(), expected_hash))
    }
}
