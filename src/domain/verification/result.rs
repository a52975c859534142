//! Verification outcome reported to the administrator.

use serde::Serialize;

use crate::domain::foundation::{ErrorCode, Timestamp};
use crate::domain::member::Member;

use super::errors::VerificationError;

/// Coarse verification status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationStatus {
    Valid,
    Invalid,
}

/// Payload attached to a verification result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VerificationData {
    /// Digest matched: snapshot of the roster record.
    Verified {
        member: Member,
        #[serde(rename = "verificationTime")]
        verification_time: Timestamp,
        status: VerificationStatus,
    },

    /// Digest mismatch diagnostics.
    Mismatch {
        #[serde(rename = "providedHash")]
        provided_hash: String,
        #[serde(rename = "expectedHash")]
        expected_hash: Option<String>,
        status: VerificationStatus,
    },
}

/// Result of verifying one presented payload.
///
/// Serializes as `{ success, message, data }` with `data` null for format
/// and lookup failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationResult {
    pub success: bool,
    pub message: String,
    pub data: Option<VerificationData>,
    #[serde(skip)]
    error: Option<VerificationError>,
}

impl VerificationResult {
    /// Successful verification of `member`, stamped now.
    pub fn verified(member: Member) -> Self {
        Self {
            success: true,
            message: "QR code verified successfully".to_string(),
            data: Some(VerificationData::Verified {
                member,
                verification_time: Timestamp::now(),
                status: VerificationStatus::Valid,
            }),
            error: None,
        }
    }

    /// Failed verification.
    pub fn rejected(error: VerificationError) -> Self {
        let data = match &error {
            VerificationError::DigestMismatch { provided, expected } => {
                Some(VerificationData::Mismatch {
                    provided_hash: provided.clone(),
                    expected_hash: expected.clone(),
                    status: VerificationStatus::Invalid,
                })
            }
            _ => None,
        };

        Self {
            success: false,
            message: error.user_message().to_string(),
            data,
            error: Some(error),
        }
    }

    /// Status; format and lookup failures count as `Invalid`.
    pub fn status(&self) -> VerificationStatus {
        if self.success {
            VerificationStatus::Valid
        } else {
            VerificationStatus::Invalid
        }
    }

    /// The matched member, on success.
    pub fn member(&self) -> Option<&Member> {
        match &self.data {
            Some(VerificationData::Verified { member, .. }) => Some(member),
            _ => None,
        }
    }

    /// When the verification succeeded.
    pub fn verification_time(&self) -> Option<Timestamp> {
        match &self.data {
            Some(VerificationData::Verified {
                verification_time, ..
            }) => Some(*verification_time),
            _ => None,
        }
    }

    /// The failure reason, if any.
    pub fn error(&self) -> Option<&VerificationError> {
        self.error.as_ref()
    }

    /// Error code of the failure, if any.
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error.as_ref().map(VerificationError::code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::MemberId;
    use chrono::NaiveDate;

    fn member() -> Member {
        Member {
            id: MemberId::new("SEDS2024003").unwrap(),
            username: "mike.johnson".to_string(),
            name: "Mike Johnson".to_string(),
            role: "Design Team".to_string(),
            batch: "2024".to_string(),
            department: "Mechanical".to_string(),
            email: "mike.johnson@example.com".to_string(),
            phone: "+91 9876543212".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            is_active: true,
            profile_photo: None,
        }
    }

    #[test]
    fn verified_result_carries_member_and_time() {
        let before = Timestamp::now();
        let result = VerificationResult::verified(member());

        assert!(result.success);
        assert_eq!(result.status(), VerificationStatus::Valid);
        assert_eq!(result.member().unwrap().name, "Mike Johnson");
        assert!(result.verification_time().unwrap() >= before);
        assert!(result.error_code().is_none());
    }

    #[test]
    fn mismatch_result_carries_diagnostics() {
        let result = VerificationResult::rejected(VerificationError::digest_mismatch(
            "bad",
            Some("good".to_string()),
        ));

        assert!(!result.success);
        assert_eq!(result.status(), VerificationStatus::Invalid);
        assert_eq!(result.error_code(), Some(ErrorCode::DigestMismatch));
        assert_eq!(
            result.data,
            Some(VerificationData::Mismatch {
                provided_hash: "bad".to_string(),
                expected_hash: Some("good".to_string()),
                status: VerificationStatus::Invalid,
            })
        );
    }

    #[test]
    fn format_failure_has_no_data() {
        let result = VerificationResult::rejected(VerificationError::invalid_format("eof"));

        assert_eq!(result.message, "Invalid QR code format");
        assert!(result.data.is_none());
        assert!(result.member().is_none());
        assert_eq!(result.error_code(), Some(ErrorCode::InvalidFormat));
    }

    #[test]
    fn serializes_verified_shape() {
        let json = serde_json::to_value(VerificationResult::verified(member())).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "QR code verified successfully");
        assert_eq!(json["data"]["status"], "VALID");
        assert_eq!(json["data"]["member"]["id"], "SEDS2024003");
        assert!(json["data"]["verificationTime"].is_string());
    }

    #[test]
    fn serializes_mismatch_shape() {
        let result =
            VerificationResult::rejected(VerificationError::digest_mismatch("bad", None));
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["data"]["status"], "INVALID");
        assert_eq!(json["data"]["providedHash"], "bad");
        assert!(json["data"]["expectedHash"].is_null());
    }

    #[test]
    fn serializes_lookup_failure_with_null_data() {
        let result = VerificationResult::rejected(VerificationError::member_not_found("X"));
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json["message"], "Member not found");
        assert!(json["data"].is_null());
    }
}
