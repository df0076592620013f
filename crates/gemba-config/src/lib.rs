//! # gemba-config
//!
//! Layered configuration loading for Gemba using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GEMBA_*` prefix, `__` as separator)
//! 2. Project-level `.gemba/config.toml`
//! 3. User-level `~/.config/gemba/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GEMBA_ACTIONS__DEADLINE_DAYS` -> `actions.deadline_days`,
//! `GEMBA_STORAGE__TRAIL_DIR` -> `storage.trail_dir`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use gemba_config::GembaConfig;
//!
//! let config = GembaConfig::load_with_dotenv().expect("config");
//! let policy = config.audit_policy();
//! println!("actions due after {} days", policy.deadline_days);
//! ```

mod actions;
mod error;
mod general;
mod scoring;
mod storage;

pub use actions::ActionsConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use scoring::ScoringConfig;
pub use storage::StorageConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use gemba_core::policy::AuditPolicy;
use serde::{Deserialize, Serialize};

/// Project-relative location of the project config file.
pub const PROJECT_CONFIG_PATH: &str = ".gemba/config.toml";

/// Prefix of the environment variables figment reads.
pub const ENV_PREFIX: &str = "GEMBA_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GembaConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub actions: ActionsConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GembaConfig {
    /// Load configuration for the current directory from all sources.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for_project(Path::new("."))
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration using `project_root/.gemba/config.toml` as the
    /// project layer.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain for the current directory.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain for `project_root`.
    ///
    /// Public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.actions.validate()?;
        if self.general.default_limit == 0 {
            return Err(ConfigError::invalid("general.default_limit", "must be at least 1"));
        }
        Ok(())
    }

    /// The engine policy these settings describe.
    #[must_use]
    pub const fn audit_policy(&self) -> AuditPolicy {
        AuditPolicy {
            thresholds: self.scoring.thresholds(),
            deadline_days: self.actions.deadline_days,
            trend_target: self.scoring.trend_target,
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gemba").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_default_policy() {
        let config = GembaConfig::default();
        assert_eq!(config.audit_policy(), AuditPolicy::default());
        assert!(config.storage.trail_enabled);
        assert_eq!(config.general.default_limit, 20);
        config.validate().unwrap();
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: GembaConfig = GembaConfig::figment().extract()?;
            assert_eq!(config.actions.deadline_days, 30);
            assert_eq!(config.general.default_limit, 20);
            Ok(())
        });
    }
}
