//! Load and validation failures for [`super::AppConfig`].

use thiserror::Error;

/// Environment could not be read into an [`super::AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A loaded value that is unusable.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Verification secret must be at least {min} characters in production")]
    SecretTooShort { min: usize },

    #[error("Secure digest tier required but no secure context is available")]
    SecureTierUnavailable,

    #[error("Invalid admin password hash: {0}")]
    InvalidAdminPasswordHash(String),

    #[error("Admin username must not be empty")]
    EmptyAdminUsername,

    #[error("Scan cooldown must be between {min} and {max} ms, got {value}")]
    InvalidCooldown { value: u64, min: u64, max: u64 },

    #[error("Invalid log filter '{0}'")]
    InvalidLogLevel(String),

    #[error("Demo password must not be set in production")]
    DemoPasswordInProduction,
}
