//! Roster source configuration

use std::path::PathBuf;

use serde::Deserialize;

use super::environment::Environment;
use super::error::ValidationError;

/// Where members come from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterConfig {
    /// YAML roster file; the embedded sample roster is used when unset
    pub path: Option<PathBuf>,

    /// Password given to members without a stored hash (demo only)
    pub demo_password: Option<String>,
}

impl RosterConfig {
    pub fn uses_sample_roster(&self) -> bool {
        self.path.is_none()
    }

    /// Validate roster configuration
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        if environment.is_production() && self.demo_password.is_some() {
            return Err(ValidationError::DemoPasswordInProduction);
        }
        if self.demo_password.as_deref().is_some_and(str::is_empty) {
            return Err(ValidationError::MissingRequired("ROSTER__DEMO_PASSWORD"));
        }
        Ok(())
    }
}
