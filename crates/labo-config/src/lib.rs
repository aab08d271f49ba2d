//! # labo-config
//!
//! Layered configuration loading for the laboratory directory service,
//! using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LABO_*` prefix, `__` as separator)
//! 2. Project-level `labo.toml`
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LABO_SERVER__PORT` -> `server.port`,
//! `LABO_DATABASE__URL` -> `database.url`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use labo_config::LaboConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = LaboConfig::load_with_dotenv().expect("config");
//!
//! if config.database.is_remote() {
//!     println!("store URL: {}", config.database.url);
//! }
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// TOML config file looked up next to the process working directory.
const CONFIG_FILE: &str = "labo.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LaboConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl LaboConfig {
    /// Load configuration from all sources (TOML file + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads a `.env` file from the current directory (if present) before
    /// building the figment. This is the typical entry point for the server
    /// binary and tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if Path::new(CONFIG_FILE).exists() {
            figment = figment.merge(Toml::file(CONFIG_FILE));
        }

        figment.merge(Env::prefixed("LABO_").split("__"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LaboConfig::default();
        assert!(!config.database.is_remote());
        assert_eq!(config.server.port, 3333);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: LaboConfig = LaboConfig::figment().extract().expect("defaults");
            assert_eq!(config.server.socket_addr(), "127.0.0.1:3333");
            assert_eq!(config.database.path, "labo.db");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LABO_SERVER__PORT", "8080");
            jail.set_env("LABO_DATABASE__URL", "libsql://labo.turso.io");
            let config: LaboConfig = LaboConfig::figment().extract().expect("env layer");
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.database.url, "libsql://labo.turso.io");
            Ok(())
        });
    }

    #[test]
    fn toml_file_overrides_defaults_and_env_wins() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "labo.toml",
                r#"
                [server]
                port = 4444

                [database]
                path = "from-toml.db"
                "#,
            )?;
            jail.set_env("LABO_SERVER__PORT", "5555");
            let config: LaboConfig = LaboConfig::figment().extract().expect("layers");
            // env beats the file, the file beats the default
            assert_eq!(config.server.port, 5555);
            assert_eq!(config.database.path, "from-toml.db");
            Ok(())
        });
    }
}
