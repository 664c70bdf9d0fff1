//! # mdsh-config
//!
//! Layered configuration loading for mdsh using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MDSH_*` prefix, `__` as separator)
//! 2. Project-level `.mdsh/config.toml`
//! 3. User-level `~/.config/mdsh/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `MDSH_GATHER__HEREDOC` -> `gather.heredoc`.
//!
//! ```no_run
//! use mdsh_config::MdshConfig;
//!
//! let config = MdshConfig::load_with_dotenv().expect("config");
//! let options = config.gather.options();
//! ```

mod error;
mod gather;

pub use error::ConfigError;
pub use gather::GatherConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "MDSH_";

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG: &str = ".mdsh/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MdshConfig {
    #[serde(default)]
    pub gather: GatherConfig,
}

impl MdshConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    /// Returns [`ConfigError::Figment`] when a source holds an invalid value.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the working directory or its parents, then [`Self::load`].
    ///
    /// # Errors
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// The provider chain, exposed so callers can merge further providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(LOCAL_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mdsh").join("config.toml"))
    }
}
