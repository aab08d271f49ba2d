//! libSQL store configuration.

use serde::{Deserialize, Serialize};

/// Default local database path.
fn default_path() -> String {
    "labo.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local libSQL database file. Used when no remote URL is configured.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://labo.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Check whether the remote store has the minimum required fields.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local() {
        let config = DatabaseConfig::default();
        assert!(!config.is_remote());
        assert_eq!(config.path, "labo.db");
    }

    #[test]
    fn remote_when_url_and_token_set() {
        let config = DatabaseConfig {
            url: "libsql://labo.turso.io".into(),
            auth_token: "token123".into(),
            ..Default::default()
        };
        assert!(config.is_remote());
    }

    #[test]
    fn url_without_token_stays_local() {
        let config = DatabaseConfig {
            url: "libsql://labo.turso.io".into(),
            ..Default::default()
        };
        assert!(!config.is_remote());
    }
}
