//! # lt-config
//!
//! Layered configuration loading for leadtime using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LEADTIME_*` prefix, `__` as separator)
//! 2. Project-level `.leadtime/config.toml`
//! 3. User-level `~/.config/leadtime/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LEADTIME_TRACKER__URL` -> `tracker.url`,
//! `LEADTIME_TRACKER__API_TOKEN` -> `tracker.api_token`, and so on.
//!
//! # Usage
//!
//! ```no_run
//! use lt_config::LeadtimeConfig;
//!
//! let config = LeadtimeConfig::load_with_dotenv().expect("config");
//! if config.tracker.is_configured() {
//!     println!("Tracker: {}", config.tracker.base_url());
//! }
//! ```

mod error;
mod report;
mod tracker;

pub use error::ConfigError;
pub use report::ReportConfig;
pub use tracker::TrackerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "LEADTIME_";

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".leadtime/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeadtimeConfig {
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl LeadtimeConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; use [`load_with_dotenv`](Self::load_with_dotenv)
    /// for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type, and [`ConfigError::InvalidValue`] if the
    /// merged result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the working directory, then [`load`](Self::load).
    ///
    /// A missing `.env` is not an error.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top or extract directly.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check every section for values that can never work.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tracker.validate()?;
        self.report.validate()
    }

    /// The tracker section, or an error if URL or token is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the tracker URL or token
    /// is blank.
    pub fn require_tracker(&self) -> Result<&TrackerConfig, ConfigError> {
        if self.tracker.is_configured() {
            Ok(&self.tracker)
        } else {
            Err(ConfigError::NotConfigured {
                section: "tracker".into(),
            })
        }
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("leadtime").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LeadtimeConfig::default();
        assert!(!config.tracker.is_configured());
        assert_eq!(config.report.error_marker, "ERROR");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unconfigured_tracker_is_reported_by_section() {
        let config = LeadtimeConfig::default();
        let err = config.require_tracker().unwrap_err();
        assert!(matches!(err, ConfigError::NotConfigured { ref section } if section == "tracker"));
    }

    #[test]
    fn global_path_is_namespaced() {
        if let Some(path) = LeadtimeConfig::global_config_path() {
            assert!(path.ends_with("leadtime/config.toml"));
        }
    }
}
