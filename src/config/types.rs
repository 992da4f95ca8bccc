//! Configuration type definitions

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Address dialed when nothing else is configured
pub const DEFAULT_SERVER_ADDRESS: &str = "http://127.0.0.1:8080";

/// Collection manager connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,

    /// Deadline for the publish call; unset means wait until cancelled
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            timeout_secs: None,
        }
    }
}

fn default_address() -> String {
    DEFAULT_SERVER_ADDRESS.to_string()
}

/// Credential store settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Docker-style config.json; unset falls back to $DOCKER_CONFIG, then ~/.docker
    #[serde(default)]
    pub config_path: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.server.timeout_secs.map(Duration::from_secs)
    }
}
