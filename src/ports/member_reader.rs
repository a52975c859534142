//! Member reader port - read-only roster lookups.
//!
//! The roster is an external, fully trusted data collaborator. Its storage
//! (embedded table, YAML file, database) is an adapter concern.
//!
//! # Example
//!
//! ```ignore
//! async fn card_holder(reader: &dyn MemberReader, id: &str) -> Option<String> {
//!     let member = reader.get_by_id(id).await.ok()??;
//!     Some(member.name)
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::member::Member;

/// Reader port for roster queries.
#[async_trait]
pub trait MemberReader: Send + Sync {
    /// Member with the given id, active or not.
    ///
    /// Takes the raw id string because it usually comes straight out of a
    /// presented payload. Returns `None` if no member has that id.
    async fn get_by_id(&self, id: &str) -> Result<Option<Member>, DomainError>;

    /// All active members, in roster order.
    async fn list_active(&self) -> Result<Vec<Member>, DomainError>;

    /// Member whose username or email equals `login`.
    async fn find_by_login(&self, login: &str) -> Result<Option<Member>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_reader_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn MemberReader) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn MemberReader>>();
    }
}
