//! GenerateTokenHandler - issues the QR token for a roster member.

use std::sync::Arc;

use crate::domain::foundation::MemberId;
use crate::domain::verification::{TokenGenerator, VerificationError, VerificationToken};
use crate::ports::MemberReader;

/// Query for a member's current verification token.
#[derive(Debug, Clone)]
pub struct GenerateTokenQuery {
    pub member_id: MemberId,
}

/// Handler that reads the member from the roster and signs its identity.
///
/// Tokens are always generated from the roster record, never from a
/// cached session copy.
#[derive(Clone)]
pub struct GenerateTokenHandler {
    members: Arc<dyn MemberReader>,
    generator: Arc<TokenGenerator>,
}

impl GenerateTokenHandler {
    pub fn new(members: Arc<dyn MemberReader>, generator: Arc<TokenGenerator>) -> Self {
        Self { members, generator }
    }

    pub async fn handle(&self, query: GenerateTokenQuery) -> Result<VerificationToken, VerificationError> {
        let member = self
            .members
            .get_by_id(query.member_id.as_str())
            .await
            .map_err(|e| VerificationError::roster_unavailable(e.message))?
            .ok_or_else(|| VerificationError::member_not_found(query.member_id.as_str()))?;

        Ok(self.generator.generate(&member))
    }
}
