//! LogoutHandler - ends the current session.

use std::sync::Arc;

use crate::domain::auth::AuthError;
use crate::domain::session::{Session, SessionContext};
use crate::ports::SessionStore;

/// Handler for logouts. Logging out while logged out is a no-op.
pub struct LogoutHandler {
    sessions: Arc<dyn SessionStore>,
}

impl LogoutHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Clears the store and the context, returning the ended session.
    pub async fn handle(&self, context: &mut SessionContext) -> Result<Option<Session>, AuthError> {
        self.sessions
            .clear()
            .await
            .map_err(|e| AuthError::service_unavailable(e.message))?;

        let ended = context.clear();
        if let Some(session) = &ended {
            tracing::info!(session_id = %session.id, "Session ended");
        }
        Ok(ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::domain::auth::{AdminAccount, Principal};

    fn admin_session() -> Session {
        Session::start(Principal::Admin {
            admin: AdminAccount::new("admin", "Admin User", "$argon2id$x").identity(),
        })
    }

    #[tokio::test]
    async fn clears_store_and_context() {
        let session = admin_session();
        let store = Arc::new(InMemorySessionStore::with_session(session.clone()));
        let mut ctx = SessionContext::from_session(Some(session.clone()));

        let ended = LogoutHandler::new(store.clone()).handle(&mut ctx).await.unwrap();

        assert_eq!(ended, Some(session));
        assert!(!ctx.is_authenticated());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn logout_when_anonymous_is_a_no_op() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut ctx = SessionContext::anonymous();
        let ended = LogoutHandler::new(store).handle(&mut ctx).await.unwrap();
        assert!(ended.is_none());
    }
}
