//! Credential store port - password hashes for roster members.
//!
//! Kept apart from `MemberReader` so member records handed to verification
//! results and sessions never carry credentials.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MemberId};

/// Looks up stored password hashes.
///
/// # Contract
///
/// Implementations must:
/// - Return PHC-format hashes only, never plaintext
/// - Return `None` for members without a credential (login disabled)
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// PHC password hash for the member, if one is set.
    async fn password_hash(&self, member_id: &MemberId) -> Result<Option<String>, DomainError>;
}
