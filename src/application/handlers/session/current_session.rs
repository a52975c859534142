//! CurrentSessionHandler - restores the session context from the store.

use std::sync::Arc;

use crate::domain::auth::{AdminAccount, AuthError, Principal};
use crate::domain::foundation::DomainError;
use crate::domain::session::{Session, SessionContext};
use crate::ports::{MemberReader, SessionStore};

/// Query handler that loads the persisted session.
///
/// A stored principal must still be entitled to a session: a member must be
/// active in the roster, an administrator must match the configured admin
/// account. Anything else is discarded and cleared from the store. Kept
/// sessions get their identity refreshed from the current source.
pub struct CurrentSessionHandler {
    sessions: Arc<dyn SessionStore>,
    members: Arc<dyn MemberReader>,
    admin: Option<AdminAccount>,
}

impl CurrentSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, members: Arc<dyn MemberReader>) -> Self {
        Self {
            sessions,
            members,
            admin: None,
        }
    }

    /// Accepts restored administrator sessions for `admin`.
    pub fn with_admin(mut self, admin: AdminAccount) -> Self {
        self.admin = Some(admin);
        self
    }

    pub async fn handle(&self) -> Result<SessionContext, AuthError> {
        let stored = self.sessions.load().await.map_err(unavailable)?;

        let Some(session) = stored else {
            return Ok(SessionContext::anonymous());
        };

        match self.revalidate(session).await? {
            Some(session) => Ok(SessionContext::from_session(Some(session))),
            None => {
                self.sessions.clear().await.map_err(unavailable)?;
                Ok(SessionContext::anonymous())
            }
        }
    }

    async fn revalidate(&self, mut session: Session) -> Result<Option<Session>, AuthError> {
        let principal = match &session.principal {
            Principal::Member { member } => {
                match self
                    .members
                    .get_by_id(member.id.as_str())
                    .await
                    .map_err(unavailable)?
                {
                    Some(fresh) if fresh.is_active => Principal::Member { member: fresh },
                    _ => {
                        tracing::info!(session_id = %session.id, "Discarding session of departed member");
                        return Ok(None);
                    }
                }
            }
            Principal::Admin { admin } => match &self.admin {
                Some(configured) if configured.username == admin.username => Principal::Admin {
                    admin: configured.identity(),
                },
                _ => {
                    tracing::warn!(
                        session_id = %session.id,
                        username = %admin.username,
                        "Discarding administrator session not backed by configuration"
                    );
                    return Ok(None);
                }
            },
        };

        session.principal = principal;
        Ok(Some(session))
    }
}

fn unavailable(err: DomainError) -> AuthError {
    AuthError::service_unavailable(err.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::roster::{sample_members, InMemoryRoster};
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::auth::AdminAccount;
    use crate::domain::session::Session;

    fn member_session(idx: usize) -> Session {
        Session::start(Principal::Member {
            member: sample_members().remove(idx),
        })
    }

    fn handler(
        store: Arc<InMemorySessionStore>,
        members: Vec<crate::domain::member::Member>,
    ) -> CurrentSessionHandler {
        CurrentSessionHandler::new(store, Arc::new(InMemoryRoster::from_members(members).unwrap()))
    }

    #[tokio::test]
    async fn empty_store_is_anonymous() {
        let ctx = handler(Arc::new(InMemorySessionStore::new()), sample_members())
            .handle()
            .await
            .unwrap();
        assert!(!ctx.is_authenticated());
    }

    #[tokio::test]
    async fn restores_member_session() {
        let session = member_session(0);
        let store = Arc::new(InMemorySessionStore::with_session(session.clone()));

        let ctx = handler(store, sample_members()).handle().await.unwrap();
        assert_eq!(ctx.current().map(|s| s.id), Some(session.id));
        assert_eq!(ctx.require_member().unwrap().name, "John Doe");
    }

    #[tokio::test]
    async fn refreshes_member_snapshot() {
        let store = Arc::new(InMemorySessionStore::with_session(member_session(0)));
        let mut members = sample_members();
        members[0].role = "Tech Lead".to_string();

        let ctx = handler(store, members).handle().await.unwrap();
        assert_eq!(ctx.require_member().unwrap().role, "Tech Lead");
    }

    #[tokio::test]
    async fn deactivated_member_session_is_discarded() {
        let store = Arc::new(InMemorySessionStore::with_session(member_session(0)));
        let mut members = sample_members();
        members[0].is_active = false;

        let ctx = handler(store.clone(), members).handle().await.unwrap();
        assert!(!ctx.is_authenticated());
        assert!(store.load().await.unwrap().is_none());
    }

    fn admin_session(username: &str) -> Session {
        Session::start(Principal::Admin {
            admin: AdminAccount::new(username, "Admin User", "$argon2id$x").identity(),
        })
    }

    fn configured_admin() -> AdminAccount {
        AdminAccount::new("admin", "Site Admin", "$argon2id$x")
    }

    #[tokio::test]
    async fn configured_admin_session_is_restored() {
        let session = admin_session("admin");
        let store = Arc::new(InMemorySessionStore::with_session(session.clone()));

        let ctx = handler(store, sample_members())
            .with_admin(configured_admin())
            .handle()
            .await
            .unwrap();
        assert_eq!(ctx.current().map(|s| s.id), Some(session.id));
        assert_eq!(ctx.require_admin().unwrap().name, "Site Admin");
    }

    #[tokio::test]
    async fn admin_session_without_configured_admin_is_discarded() {
        let store = Arc::new(InMemorySessionStore::with_session(admin_session("nobody")));

        let ctx = handler(store.clone(), sample_members()).handle().await.unwrap();
        assert!(!ctx.is_authenticated());
        assert!(ctx.require_admin().is_err());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn admin_session_for_other_username_is_discarded() {
        let store = Arc::new(InMemorySessionStore::with_session(admin_session("root")));

        let ctx = handler(store.clone(), sample_members())
            .with_admin(configured_admin())
            .handle()
            .await
            .unwrap();
        assert!(ctx.require_admin().is_err());
        assert!(store.load().await.unwrap().is_none());
    }
}
