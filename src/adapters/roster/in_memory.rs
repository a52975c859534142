//! In-memory roster adapter.
//!
//! Serves both `MemberReader` and `CredentialStore` from a `Roster` held in
//! memory. Used for the embedded sample roster, for file-loaded rosters, and
//! in tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::auth::{hash_password, AuthError};
use crate::domain::foundation::{DomainError, MemberId};
use crate::domain::member::{Member, Roster, RosterError};
use crate::ports::{CredentialStore, MemberReader};

/// Read-only roster plus member password hashes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    roster: Roster,
    credentials: HashMap<MemberId, String>,
}

impl InMemoryRoster {
    /// Wraps an assembled roster with no credentials.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            credentials: HashMap::new(),
        }
    }

    /// Builds the roster from member records.
    pub fn from_members(members: Vec<Member>) -> Result<Self, RosterError> {
        Ok(Self::new(Roster::new(members)?))
    }

    /// Attaches an existing PHC hash to a member.
    pub fn with_password_hash(mut self, member_id: MemberId, phc: impl Into<String>) -> Self {
        self.credentials.insert(member_id, phc.into());
        self
    }

    /// Hashes `password` and attaches it to a member.
    pub fn with_password(self, member_id: MemberId, password: &str) -> Result<Self, AuthError> {
        let phc = hash_password(password)?;
        Ok(self.with_password_hash(member_id, phc))
    }

    /// Gives every member without a credential the same password.
    ///
    /// Intended for the demo roster only.
    pub fn with_shared_password(mut self, password: &str) -> Result<Self, AuthError> {
        let missing: Vec<MemberId> = self
            .roster
            .all()
            .iter()
            .map(|m| m.id.clone())
            .filter(|id| !self.credentials.contains_key(id))
            .collect();

        for id in missing {
            self.credentials.insert(id, hash_password(password)?);
        }
        Ok(self)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Number of members with a credential.
    pub fn credential_count(&self) -> usize {
        self.credentials.len()
    }
}

#[async_trait]
impl MemberReader for InMemoryRoster {
    async fn get_by_id(&self, id: &str) -> Result<Option<Member>, DomainError> {
        Ok(self.roster.get_str(id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Member>, DomainError> {
        Ok(self.roster.active().cloned().collect())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<Member>, DomainError> {
        Ok(self.roster.find_by_login(login).cloned())
    }
}

#[async_trait]
impl CredentialStore for InMemoryRoster {
    async fn password_hash(&self, member_id: &MemberId) -> Result<Option<String>, DomainError> {
        Ok(self.credentials.get(member_id).cloned())
    }
}
