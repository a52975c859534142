//! Administrator account configuration

use serde::Deserialize;

use crate::domain::auth::{validate_password_hash, AdminAccount};

use super::error::ValidationError;

/// Administrator login settings
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_name")]
    pub name: String,

    /// Argon2 PHC string; admin login is disabled when unset
    pub password_hash: Option<String>,
}

impl AdminConfig {
    /// The configured account, if admin login is enabled.
    pub fn account(&self) -> Option<AdminAccount> {
        self.password_hash
            .as_ref()
            .map(|phc| AdminAccount::new(&self.username, &self.name, phc))
    }

    /// Validate admin configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::EmptyAdminUsername);
        }
        if let Some(phc) = &self.password_hash {
            validate_password_hash(phc)
                .map_err(|e| ValidationError::InvalidAdminPasswordHash(e.to_string()))?;
        }
        Ok(())
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            name: default_name(),
            password_hash: None,
        }
    }
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_name() -> String {
    "Admin User".to_string()
}
