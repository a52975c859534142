//! Session persistence configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Where the CLI keeps the current login between invocations
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from(".digital-id-session.json")
}
