//! Issue tracker (Jira) connection settings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("leadtime/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Clone, Deserialize, Serialize)]
pub struct TrackerConfig {
    /// Base URL of the tracker (e.g., `https://jira.example.com`).
    #[serde(default)]
    pub url: String,

    /// Personal access token sent as a bearer credential.
    #[serde(default)]
    pub api_token: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header for outbound requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_token: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("url", &self.url)
            .field(
                "api_token",
                &if self.api_token.is_empty() { "" } else { "<redacted>" },
            )
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl TrackerConfig {
    /// Check if both the URL and the token are set.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.api_token.trim().is_empty()
    }

    /// The URL without trailing slashes, ready for path concatenation.
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    /// Reject settings that cannot produce a working client.
    ///
    /// An unset section is not an error here; use [`is_configured`](Self::is_configured)
    /// before connecting.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a URL without an `http`/`https`
    /// scheme or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url();
        if !url.is_empty() && !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "tracker.url".into(),
                reason: format!("'{url}' must start with http:// or https://"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tracker.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
