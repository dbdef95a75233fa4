//! # fl-config
//!
//! Layered configuration loading for Fieldline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FIELDLINE_*` prefix, `__` as separator)
//! 2. Project-level `.fieldline/config.toml`
//! 3. User-level `~/.config/fieldline/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FIELDLINE_API__BASE_URL` -> `api.base_url`,
//! `FIELDLINE_AUTH__ROLE` -> `auth.role`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use fl_config::FieldlineConfig;
//!
//! let config = FieldlineConfig::load_with_dotenv().expect("config");
//!
//! if config.api.is_configured() {
//!     println!("Ticket service: {}", config.api.base_url);
//! }
//! ```

mod api;
mod auth;
mod error;
mod general;

pub use api::ApiConfig;
pub use auth::AuthConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, MAX_PAGE_SIZE};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "FIELDLINE_";
const LOCAL_CONFIG: &str = ".fieldline/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FieldlineConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl FieldlineConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
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

    /// Load configuration with an explicit project config file in place of
    /// `.fieldline/config.toml`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_from(project_config: &Path) -> Result<Self, ConfigError> {
        Self::figment_with(Some(project_config))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        Self::figment_with(Some(Path::new(LOCAL_CONFIG)))
    }

    fn figment_with(project_config: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        if let Some(local_path) = project_config
            && local_path.exists()
        {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fieldline").join("config.toml"))
    }
}
