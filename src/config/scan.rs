//! Continuous scanning configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MIN_COOLDOWN_MS: u64 = 1;
const MAX_COOLDOWN_MS: u64 = 60_000;

/// Scan gate settings
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Pause after each verification before accepting new detections
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
}

impl ScanConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    /// Validate scan configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_COOLDOWN_MS..=MAX_COOLDOWN_MS).contains(&self.cooldown_ms) {
            return Err(ValidationError::InvalidCooldown {
                value: self.cooldown_ms,
                min: MIN_COOLDOWN_MS,
                max: MAX_COOLDOWN_MS,
            });
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
        }
    }
}

fn default_cooldown_ms() -> u64 {
    3000
}
