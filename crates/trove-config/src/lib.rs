//! # trove-config
//!
//! Layered configuration loading for trove using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TROVE_*` prefix, `__` as separator)
//! 2. Project-level `.trove/config.toml`
//! 3. User-level `~/.config/trove/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TROVE_FETCH__TIMEOUT_SECS` -> `fetch.timeout_secs`,
//! `TROVE_VALIDATION__MIN_LINK_COUNT` -> `validation.min_link_count`, etc.
//! The `__` (double underscore) separates nested config sections.

mod error;
mod fetch;
mod validation;

pub use error::ConfigError;
pub use fetch::FetchConfig;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TroveConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl TroveConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to merge or extract, or if
    /// a loaded value is out of range (e.g. a zero fetch timeout).
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract().map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".trove/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TROVE_").split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.fetch.user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "fetch.user_agent".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("trove").join("config.toml"))
    }
}
