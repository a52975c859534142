//! Login session and the per-client session context.

use serde::{Deserialize, Serialize};

use crate::domain::auth::{AdminIdentity, AuthError, Principal};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::member::Member;

/// A started login session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub principal: Principal,
    pub started_at: Timestamp,
}

impl Session {
    /// Starts a new session for `principal`.
    pub fn start(principal: Principal) -> Self {
        Self {
            id: SessionId::new(),
            principal,
            started_at: Timestamp::now(),
        }
    }
}

/// Current authenticated identity for this client.
///
/// Passed explicitly to whatever needs it; loaded from and saved to a
/// `SessionStore` by the session handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    current: Option<Session>,
}

impl SessionContext {
    /// Context with no one logged in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context restored from a stored session.
    pub fn from_session(session: Option<Session>) -> Self {
        Self { current: session }
    }

    /// Replaces the current session.
    pub fn store(&mut self, session: Session) {
        self.current = Some(session);
    }

    /// Ends the current session, returning it.
    pub fn clear(&mut self) -> Option<Session> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The session, or `NotAuthenticated`.
    pub fn require_authenticated(&self) -> Result<&Session, AuthError> {
        self.current.as_ref().ok_or(AuthError::NotAuthenticated)
    }

    /// The logged-in administrator, or an auth error.
    pub fn require_admin(&self) -> Result<&AdminIdentity, AuthError> {
        self.require_authenticated()?
            .principal
            .admin()
            .ok_or(AuthError::Forbidden("admin"))
    }

    /// The logged-in member, or an auth error.
    pub fn require_member(&self) -> Result<&Member, AuthError> {
        self.require_authenticated()?
            .principal
            .member()
            .ok_or(AuthError::Forbidden("member"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::AdminAccount;
    use crate::domain::foundation::MemberId;
    use chrono::NaiveDate;

    fn member_session() -> Session {
        Session::start(Principal::Member {
            member: Member {
                id: MemberId::new("SEDS2024004").unwrap(),
                username: "sarah.wilson".to_string(),
                name: "Sarah Wilson".to_string(),
                role: "Content Team".to_string(),
                batch: "2023".to_string(),
                department: "English".to_string(),
                email: "sarah.wilson@example.com".to_string(),
                phone: "+91 9876543213".to_string(),
                join_date: NaiveDate::from_ymd_opt(2023, 9, 15).unwrap(),
                is_active: true,
                profile_photo: None,
            },
        })
    }

    fn admin_session() -> Session {
        Session::start(Principal::Admin {
            admin: AdminAccount::new("admin", "Admin User", "$argon2id$stub").identity(),
        })
    }

    #[test]
    fn anonymous_context_requires_login() {
        let ctx = SessionContext::anonymous();
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.require_authenticated().unwrap_err(), AuthError::NotAuthenticated);
        assert_eq!(ctx.require_admin().unwrap_err(), AuthError::NotAuthenticated);
    }

    #[test]
    fn store_then_clear_lifecycle() {
        let mut ctx = SessionContext::anonymous();
        let session = member_session();

        ctx.store(session.clone());
        assert_eq!(ctx.current(), Some(&session));

        let cleared = ctx.clear();
        assert_eq!(cleared, Some(session));
        assert!(ctx.current().is_none());
    }

    #[test]
    fn member_session_is_not_admin() {
        let ctx = SessionContext::from_session(Some(member_session()));

        assert_eq!(ctx.require_member().unwrap().name, "Sarah Wilson");
        assert_eq!(ctx.require_admin().unwrap_err(), AuthError::Forbidden("admin"));
    }

    #[test]
    fn admin_session_is_not_member() {
        let ctx = SessionContext::from_session(Some(admin_session()));

        assert_eq!(ctx.require_admin().unwrap().name, "Admin User");
        assert_eq!(ctx.require_member().unwrap_err(), AuthError::Forbidden("member"));
    }

    #[test]
    fn session_round_trips_through_json() {
        let session = member_session();
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
