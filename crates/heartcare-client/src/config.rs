//! Backend connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Default backend address (the development server).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding [`ApiConfig::base_url`].
pub const ENV_API_URL: &str = "HEARTCARE_API_URL";

/// Environment variable overriding [`ApiConfig::timeout_secs`].
pub const ENV_API_TIMEOUT: &str = "HEARTCARE_API_TIMEOUT";

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; endpoint paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Creates a config for the given base URL with the default timeout.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Applies `HEARTCARE_API_URL` and `HEARTCARE_API_TIMEOUT` from the
    /// process environment.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary lookup. Blank values are ignored.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_API_TIMEOUT).filter(|v| !v.trim().is_empty()) {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                ApiError::Config(format!("{ENV_API_TIMEOUT} must be whole seconds, got {raw:?}"))
            })?;
        }
        Ok(self)
    }
}
