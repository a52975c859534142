//! Environment-driven configuration (`config` + `dotenvy`).
//!
//! # Example
//!
//! ```no_run
//! use digital_id::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Digest tier: {:?}", config.verification.resolve_tier());
//! ```

mod admin;
mod environment;
mod error;
mod logging;
mod roster;
mod scan;
mod session;
mod verification;

pub use admin::AdminConfig;
pub use environment::Environment;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use roster::RosterConfig;
pub use scan::ScanConfig;
pub use session::SessionConfig;
pub use verification::{VerificationConfig, MIN_PRODUCTION_SECRET_LEN};

use serde::Deserialize;

/// Everything the CLI needs, one struct per section.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Shared secret and digest tier
    pub verification: VerificationConfig,

    /// Roster source
    #[serde(default)]
    pub roster: RosterConfig,

    /// Administrator account
    #[serde(default)]
    pub admin: AdminConfig,

    /// Session persistence
    #[serde(default)]
    pub session: SessionConfig,

    /// Scan gate
    #[serde(default)]
    pub scan: ScanConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads `.env` (if any), then every `DIGITAL_ID__*` variable.
    ///
    /// Section and key are joined by `__`, so
    /// `DIGITAL_ID__VERIFICATION__SECRET` fills `verification.secret` and
    /// `DIGITAL_ID__SCAN__COOLDOWN_MS` fills `scan.cooldown_ms`. Only the
    /// secret is mandatory.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when the secret is missing or a value does
    /// not parse.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DIGITAL_ID")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic checks that deserialization cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.verification.validate(self.environment)?;
        self.roster.validate(self.environment)?;
        self.admin.validate()?;
        self.scan.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
