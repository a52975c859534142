//! Authenticated principals: members and the administrator.

use serde::{Deserialize, Serialize};

use crate::domain::member::Member;

/// Role label shown for the administrator.
pub const ADMIN_ROLE: &str = "Administrator";

/// Administrator account loaded from configuration.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub username: String,
    pub name: String,
    /// PHC string; never serialized.
    pub password_hash: String,
}

impl AdminAccount {
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Public view of the account, safe to keep in a session.
    pub fn identity(&self) -> AdminIdentity {
        AdminIdentity {
            username: self.username.clone(),
            name: self.name.clone(),
            role: ADMIN_ROLE.to_string(),
        }
    }
}

/// Administrator identity without credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub username: String,
    pub name: String,
    pub role: String,
}

/// Who is logged in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Principal {
    Member { member: Member },
    Admin { admin: AdminIdentity },
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        matches!(self, Principal::Admin { .. })
    }

    /// `"admin"` or `"member"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Principal::Member { .. } => "member",
            Principal::Admin { .. } => "admin",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Principal::Member { member } => &member.name,
            Principal::Admin { admin } => &admin.name,
        }
    }

    pub fn member(&self) -> Option<&Member> {
        match self {
            Principal::Member { member } => Some(member),
            Principal::Admin { .. } => None,
        }
    }

    pub fn admin(&self) -> Option<&AdminIdentity> {
        match self {
            Principal::Admin { admin } => Some(admin),
            Principal::Member { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Principal {
        Principal::Admin {
            admin: AdminAccount::new("admin", "Admin User", "$argon2id$stub").identity(),
        }
    }

    #[test]
    fn admin_identity_has_administrator_role() {
        let identity = AdminAccount::new("admin", "Admin User", "$argon2id$stub").identity();
        assert_eq!(identity.role, "Administrator");
        assert_eq!(identity.username, "admin");
    }

    #[test]
    fn admin_principal_accessors() {
        let principal = admin();
        assert!(principal.is_admin());
        assert_eq!(principal.kind(), "admin");
        assert_eq!(principal.display_name(), "Admin User");
        assert!(principal.member().is_none());
        assert!(principal.admin().is_some());
    }

    #[test]
    fn principal_serializes_with_type_tag() {
        let json = serde_json::to_value(admin()).unwrap();
        assert_eq!(json["type"], "admin");
        assert_eq!(json["admin"]["name"], "Admin User");
        assert!(json["admin"].get("password_hash").is_none());
    }
}
