//! Verification configuration (shared secret and digest tier)

use once_cell::sync::OnceCell;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::verification::{DigestPreference, DigestTier, TokenGenerator, TokenVerifier};

use super::environment::Environment;
use super::error::ValidationError;

/// Minimum secret length accepted in production.
pub const MIN_PRODUCTION_SECRET_LEN: usize = 16;

/// Shared-secret and digest settings used by both generator and verifier.
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationConfig {
    /// Shared secret mixed into every digest
    pub secret: SecretString,

    /// `secure`, `fallback` or `auto`
    #[serde(default)]
    pub digest_tier: DigestPreference,

    /// Whether the secure (SHA-256) primitive may be used
    #[serde(default = "default_true")]
    pub secure_context: bool,

    /// Include the expected digest in mismatch results
    #[serde(default = "default_true")]
    pub disclose_expected_digest: bool,

    #[serde(skip)]
    resolved_tier: OnceCell<DigestTier>,
}

impl VerificationConfig {
    pub fn new(secret: impl Into<String>, digest_tier: DigestPreference, secure_context: bool) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
            digest_tier,
            secure_context,
            disclose_expected_digest: true,
            resolved_tier: OnceCell::new(),
        }
    }

    /// The process-wide digest tier. Resolved on first call; later calls
    /// return the same tier.
    pub fn resolve_tier(&self) -> Result<DigestTier, ValidationError> {
        self.resolved_tier
            .get_or_try_init(|| {
                self.digest_tier
                    .resolve(self.secure_context)
                    .map_err(|_| ValidationError::SecureTierUnavailable)
            })
            .copied()
    }

    /// Builds the generator for the resolved tier.
    pub fn generator(&self) -> Result<TokenGenerator, ValidationError> {
        let tier = self.resolve_tier()?;
        if tier.is_degraded() {
            tracing::warn!(
                preference = ?self.digest_tier,
                "Using fallback digest; QR payloads are not cryptographically protected"
            );
        } else {
            tracing::debug!(preference = ?self.digest_tier, "Using SHA-256 digest");
        }
        Ok(TokenGenerator::new(self.secret.expose_secret().as_str(), tier))
    }

    /// Applies the disclosure setting to a verifier.
    pub fn configure_verifier(&self, verifier: TokenVerifier) -> TokenVerifier {
        verifier.with_expected_digest_disclosure(self.disclose_expected_digest)
    }

    /// Validate verification configuration
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        let secret = self.secret.expose_secret();
        if secret.trim().is_empty() {
            return Err(ValidationError::MissingRequired("VERIFICATION__SECRET"));
        }
        if environment.is_production() && secret.chars().count() < MIN_PRODUCTION_SECRET_LEN {
            return Err(ValidationError::SecretTooShort {
                min: MIN_PRODUCTION_SECRET_LEN,
            });
        }
        self.resolve_tier()?;
        Ok(())
    }
}

fn default_true() -> bool {
    true
}
