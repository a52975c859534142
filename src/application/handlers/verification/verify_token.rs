//! VerifyTokenHandler - checks a presented QR payload against the roster.

use std::sync::Arc;

use crate::domain::verification::{TokenVerifier, VerificationError, VerificationResult, VerificationToken};
use crate::ports::MemberReader;

/// Command to verify one scanned or pasted payload.
#[derive(Debug, Clone)]
pub struct VerifyTokenCommand {
    pub payload: String,
}

impl VerifyTokenCommand {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

/// Handler for payload verification.
///
/// Never fails: every error is reported inside the returned
/// `VerificationResult`.
#[derive(Clone)]
pub struct VerifyTokenHandler {
    members: Arc<dyn MemberReader>,
    verifier: TokenVerifier,
}

impl VerifyTokenHandler {
    pub fn new(members: Arc<dyn MemberReader>, verifier: TokenVerifier) -> Self {
        Self { members, verifier }
    }

    pub async fn handle(&self, cmd: VerifyTokenCommand) -> VerificationResult {
        let result = match self.verify(&cmd.payload).await {
            Ok(result) => result,
            Err(error) => VerificationResult::rejected(error),
        };

        match result.error_code() {
            None => tracing::info!(
                member_id = result.member().map(|m| m.id.as_str()).unwrap_or_default(),
                "QR code verified"
            ),
            Some(code) => tracing::debug!(%code, "QR code rejected"),
        }
        result
    }

    async fn verify(&self, payload: &str) -> Result<VerificationResult, VerificationError> {
        // 1. Decode
        let token = VerificationToken::from_payload(payload)?;

        // 2. Resolve the claimed member
        let member = self
            .members
            .get_by_id(&token.member_info.id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Roster lookup failed during verification");
                VerificationError::roster_unavailable(e.message)
            })?
            .ok_or_else(|| VerificationError::member_not_found(token.member_info.id.as_str()))?;

        // 3. Recompute and compare
        self.verifier.check(&token, &member)?;

        Ok(VerificationResult::verified(member))
    }
}
