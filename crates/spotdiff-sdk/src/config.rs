use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};

/// Limits and timing for a review session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Largest accepted document, in bytes of text.
    pub max_document_bytes: usize,
    /// Largest accepted document, in lines.
    pub max_lines: usize,
    /// Minimum time a review must run before it may be finished.
    pub min_review_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: 1024 * 1024,
            max_lines: 10_000,
            min_review_ms: 10_000,
        }
    }
}

impl SessionConfig {
    /// No minimum review time. Used for batch scoring where no one is watching a clock.
    pub fn untimed() -> Self {
        Self {
            min_review_ms: 0,
            ..Default::default()
        }
    }

    pub fn min_review(&self) -> Duration {
        Duration::from_millis(self.min_review_ms)
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> SdkResult<Self> {
        toml::from_str(s).map_err(|e| SdkError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> SdkResult<String> {
        toml::to_string(self).map_err(|e| SdkError::Config(e.to_string()))
    }
}
