//! Roster - the authoritative, read-only collection of members.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, MemberId};

use super::Member;

/// Errors raised while assembling a roster.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Duplicate member id: {0}")]
    DuplicateMember(MemberId),

    #[error("Duplicate username: {0}")]
    DuplicateUsername(String),
}

impl RosterError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::DuplicateMember
    }
}

/// Immutable member roster indexed by identifier.
///
/// Lookups by id see every member; listings only see active ones.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    members: Vec<Member>,
    by_id: HashMap<String, usize>,
}

impl Roster {
    /// Builds a roster, rejecting duplicate ids and usernames.
    pub fn new(members: Vec<Member>) -> Result<Self, RosterError> {
        let mut by_id = HashMap::with_capacity(members.len());
        let mut usernames = HashSet::with_capacity(members.len());

        for (idx, member) in members.iter().enumerate() {
            if by_id.insert(member.id.as_str().to_owned(), idx).is_some() {
                return Err(RosterError::DuplicateMember(member.id.clone()));
            }
            if !usernames.insert(member.username.clone()) {
                return Err(RosterError::DuplicateUsername(member.username.clone()));
            }
        }

        Ok(Self { members, by_id })
    }

    /// Member with the given id, active or not.
    pub fn get(&self, id: &MemberId) -> Option<&Member> {
        self.get_str(id.as_str())
    }

    /// Member with the given raw id string, as presented in a payload.
    pub fn get_str(&self, id: &str) -> Option<&Member> {
        self.by_id.get(id).map(|&idx| &self.members[idx])
    }

    /// First member whose username or email equals `login`.
    pub fn find_by_login(&self, login: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.matches_login(login))
    }

    /// Active members in roster order.
    pub fn active(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_active)
    }

    /// Every member in roster order.
    pub fn all(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
