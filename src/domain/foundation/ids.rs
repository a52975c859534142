//! Identifier value objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;

/// Roster identifier of a member, e.g. `SEDS2024001`.
///
/// Opaque text; the only rule is that it is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("member_id"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MemberId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MemberId> for String {
    fn from(id: MemberId) -> Self {
        id.0
    }
}

impl AsRef<str> for MemberId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Random v4 identifier of one login session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_id_keeps_roster_spelling() {
        let id = MemberId::new("SEDS2024001").unwrap();
        assert_eq!(id.as_str(), "SEDS2024001");
        assert_eq!(format!("{:<13}|", id), "SEDS2024001  |");
    }

    #[test]
    fn blank_member_ids_are_rejected() {
        for blank in ["", "   ", "\t"] {
            let Err(ValidationError::EmptyField { field }) = MemberId::new(blank) else {
                panic!("{:?} accepted", blank);
            };
            assert_eq!(field, "member_id");
        }
    }

    #[test]
    fn member_id_is_a_bare_json_string() {
        let id = MemberId::new("SEDS2024002").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"SEDS2024002\"");
        assert_eq!(serde_json::from_str::<MemberId>("\"SEDS2024002\"").unwrap(), id);
        assert!(serde_json::from_str::<MemberId>("\"\"").is_err());
    }

    #[test]
    fn session_ids_are_random() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn session_id_text_form_round_trips() {
        let text = "550e8400-e29b-41d4-a716-446655440000";
        let id: SessionId = text.parse().unwrap();
        assert_eq!(id.to_string(), text);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }
}
