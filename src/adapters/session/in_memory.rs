//! In-memory session store for tests and single-process use.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::session::Session;
use crate::ports::SessionStore;

/// Holds at most one session in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    slot: Arc<RwLock<Option<Session>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `session`.
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(session))),
        }
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<Session>, DomainError> {
        Ok(self.slot.read().await.clone())
    }

    async fn store(&self, session: &Session) -> Result<(), DomainError> {
        *self.slot.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.slot.write().await.take();
        Ok(())
    }
}
