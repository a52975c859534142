//! Verification token and its QR payload encoding.
//!
//! Wire format (JSON, field names fixed for compatibility with deployed
//! cards):
//!
//! ```json
//! {"hash":"<hex digest>","memberInfo":{"name":"…","id":"…","role":"…","batch":"…"}}
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::member::Member;

use super::errors::VerificationError;

/// Identity fields copied into the token so the verifier can find the member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    #[serde(default)]
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub batch: String,
}

impl From<&Member> for MemberInfo {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            id: member.id.as_str().to_string(),
            role: member.role.clone(),
            batch: member.batch.clone(),
        }
    }
}

/// Digest plus redundant identity fields, as shown in a member's QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    pub hash: String,
    #[serde(rename = "memberInfo")]
    pub member_info: MemberInfo,
}

impl VerificationToken {
    /// Encodes the token as the compact JSON payload placed in the QR code.
    pub fn to_payload(&self) -> String {
        // A struct of plain strings always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Decodes a scanned or pasted payload.
    ///
    /// Surrounding whitespace is ignored; unknown fields are tolerated.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` if the payload is not JSON or lacks `hash` /
    /// `memberInfo.id`.
    pub fn from_payload(payload: &str) -> Result<Self, VerificationError> {
        serde_json::from_str(payload.trim())
            .map_err(|e| VerificationError::invalid_format(e.to_string()))
    }

    /// Short digest prefix shown on text cards.
    pub fn short_hash(&self) -> &str {
        let end = self
            .hash
            .char_indices()
            .nth(8)
            .map(|(idx, _)| idx)
            .unwrap_or(self.hash.len());
        &self.hash[..end]
    }
}
