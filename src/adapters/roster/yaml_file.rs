//! YAML roster file loader.
//!
//! File layout:
//!
//! ```yaml
//! members:
//!   - id: SEDS2024001
//!     username: john.doe
//!     name: John Doe
//!     role: Core Team
//!     batch: "2024"
//!     department: Computer Science
//!     email: john.doe@example.com
//!     phone: "+91 9876543210"
//!     joinDate: 2024-01-15
//!     passwordHash: "$argon2id$v=19$..."
//! ```
//!
//! `passwordHash` is optional; members without one cannot log in.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::auth::validate_password_hash;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::member::{Member, RosterError};

use super::InMemoryRoster;

/// Errors raised while loading a roster file.
#[derive(Debug, Error)]
pub enum RosterFileError {
    #[error("Failed to read roster file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed roster file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Invalid(#[from] RosterError),

    #[error("Member {member} has an invalid password hash: {reason}")]
    InvalidPasswordHash { member: String, reason: String },
}

impl From<RosterFileError> for DomainError {
    fn from(err: RosterFileError) -> Self {
        let code = match &err {
            RosterFileError::Invalid(inner) => inner.code(),
            RosterFileError::InvalidPasswordHash { .. } => ErrorCode::InvalidFormat,
            _ => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RosterFile {
    #[serde(default)]
    pub(crate) members: Vec<RosterEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RosterEntry {
    #[serde(flatten)]
    pub(crate) member: Member,

    #[serde(default, rename = "passwordHash")]
    pub(crate) password_hash: Option<String>,
}

pub(crate) fn parse_roster_yaml(source: &str) -> Result<RosterFile, RosterFileError> {
    Ok(serde_yaml::from_str(source)?)
}

/// Builds an in-memory roster from YAML text.
pub fn roster_from_yaml(source: &str) -> Result<InMemoryRoster, RosterFileError> {
    let file = parse_roster_yaml(source)?;

    let mut credentials = Vec::new();
    let mut members = Vec::with_capacity(file.members.len());
    for entry in file.members {
        if let Some(phc) = entry.password_hash {
            validate_password_hash(&phc).map_err(|e| RosterFileError::InvalidPasswordHash {
                member: entry.member.id.to_string(),
                reason: e.to_string(),
            })?;
            credentials.push((entry.member.id.clone(), phc));
        }
        members.push(entry.member);
    }

    let roster = credentials.into_iter().fold(
        InMemoryRoster::from_members(members)?,
        |roster, (id, phc)| roster.with_password_hash(id, phc),
    );
    Ok(roster)
}

/// Loads a roster file from disk.
pub fn load_roster_file(path: impl AsRef<Path>) -> Result<InMemoryRoster, RosterFileError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| RosterFileError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let roster = roster_from_yaml(&source)?;
    tracing::info!(
        path = %path.display(),
        members = roster.roster().len(),
        credentials = roster.credential_count(),
        "Roster loaded"
    );
    Ok(roster)
}
