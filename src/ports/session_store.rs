//! Session store port - persistence of the client's login session.
//!
//! One store holds at most one session: the identity of the client that
//! owns it.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::session::Session;

/// Load / store / clear lifecycle for the current session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The stored session, if any.
    async fn load(&self) -> Result<Option<Session>, DomainError>;

    /// Replaces the stored session.
    async fn store(&self, session: &Session) -> Result<(), DomainError>;

    /// Removes the stored session. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), DomainError>;
}
