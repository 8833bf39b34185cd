//! # wpd-config
//!
//! Layered configuration loading for the advisor using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WPD_*` prefix, `__` as separator)
//! 2. Project-level `wpd.toml`
//! 3. User-level `~/.config/wpd/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WPD_DIRECTORY__TIMEOUT_SECS` -> `directory.timeout_secs`,
//! `WPD_ADVISOR__COMPAT_LOOKAHEAD_STEPS` -> `advisor.compat_lookahead_steps`,
//! etc. The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use wpd_config::WpdConfig;
//!
//! let config = WpdConfig::load().expect("config");
//! println!("directory API: {}", config.directory.api_base);
//! ```

mod advisor;
mod directory;
mod error;

pub use advisor::AdvisorConfig;
pub use directory::DirectoryConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WpdConfig {
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

impl WpdConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`WPD_*` prefix)
    /// 2. `wpd.toml` (project-local)
    /// 3. `~/.config/wpd/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any layer fails to parse or the merged
    /// result does not deserialize.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
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
        let local_path = PathBuf::from("wpd.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("WPD_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wpd").join("config.toml"))
    }
}
