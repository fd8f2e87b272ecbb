//! # roster-config
//!
//! Layered configuration loading for roster using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ROSTER_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.roster/config.toml`
//! 4. User-level `~/.config/roster/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ROSTER_INPUT__DELIMITER` -> `input.delimiter` and
//! `ROSTER_OUTPUT__FORMAT` -> `output.format`.
//!
//! # Usage
//!
//! ```no_run
//! use roster_config::RosterConfig;
//!
//! let config = RosterConfig::load_with_dotenv(None).expect("config");
//! let delimiter = config.input.delimiter_byte().expect("delimiter");
//! ```

mod error;
mod input;
mod output;

pub use error::ConfigError;
pub use input::InputConfig;
pub use output::{OutputConfig, OutputFormat};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl RosterConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `extra` is an additional TOML file layered above the discovered files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `extra` does not exist, and
    /// [`ConfigError::Figment`] if any layer fails to parse or extract.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = extra
            && !path.exists()
        {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        Self::figment(extra).extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// A missing `.env` is not an error.
    ///
    /// # Errors
    ///
    /// Same as [`RosterConfig::load`].
    pub fn load_with_dotenv(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(extra)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".roster/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("ROSTER_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("roster").join("config.toml"))
    }
}
