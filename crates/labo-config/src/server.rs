//! HTTP listener configuration.

use serde::{Deserialize, Serialize};

/// Default bind address.
fn default_bind() -> String {
    "127.0.0.1".to_string()
}

/// Default listen port.
const fn default_port() -> u16 {
    3333
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind the listener to.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Socket address string for the listener.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
