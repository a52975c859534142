//! ListMembersHandler - active roster listing for the administrator.

use std::sync::Arc;

use crate::domain::member::Member;
use crate::domain::session::SessionContext;
use crate::ports::MemberReader;

use super::errors::RosterQueryError;

/// Returns active members in roster order. Admin only.
pub struct ListMembersHandler {
    members: Arc<dyn MemberReader>,
}

impl ListMembersHandler {
    pub fn new(members: Arc<dyn MemberReader>) -> Self {
        Self { members }
    }

    pub async fn handle(&self, context: &SessionContext) -> Result<Vec<Member>, RosterQueryError> {
        context.require_admin()?;
        Ok(self.members.list_active().await?)
    }
}
