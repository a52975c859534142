//! Token generator - derives a member's verification token.
//!
//! The digest input is the canonical string
//! `"{name}|{id}|{role}|{secret}"`. Batch is carried in the token but is not
//! bound by the digest.

use secrecy::{ExposeSecret, SecretString};

use crate::domain::member::Member;

use super::digest::DigestTier;
use super::token::{MemberInfo, VerificationToken};

/// Field delimiter of the canonical digest input.
pub const CANONICAL_DELIMITER: char = '|';

/// Generates verification tokens for roster members.
///
/// Pure: the same member, secret, and tier always yield the same token.
#[derive(Debug)]
pub struct TokenGenerator {
    secret: SecretString,
    tier: DigestTier,
}

impl TokenGenerator {
    /// Creates a generator bound to the shared secret and the resolved tier.
    pub fn new(secret: impl Into<String>, tier: DigestTier) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
            tier,
        }
    }

    /// The digest tier this generator uses.
    pub fn tier(&self) -> DigestTier {
        self.tier
    }

    /// Builds the token displayed on the member's card.
    pub fn generate(&self, member: &Member) -> VerificationToken {
        let hash = self.digest_for(member);

        tracing::debug!(
            member_id = %member.id,
            tier = %self.tier,
            "Generated verification token"
        );

        VerificationToken {
            hash,
            member_info: MemberInfo::from(member),
        }
    }

    /// Digest binding the member's name, id, and role to the secret.
    pub fn digest_for(&self, member: &Member) -> String {
        self.tier.digest(&self.canonical_input(member))
    }

    fn canonical_input(&self, member: &Member) -> String {
        format!(
            "{name}{d}{id}{d}{role}{d}{secret}",
            name = member.name,
            id = member.id,
            role = member.role,
            secret = self.secret.expose_secret(),
            d = CANONICAL_DELIMITER,
        )
    }
}
