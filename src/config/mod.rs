//! Configuration module for sample-client
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (SAMPLE_CLIENT_*)
//! 3. Config file (`--config`, else ~/.config/sample-client/config.toml)
//! 4. Built-in defaults

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    apply_env, load_or_default, load_with_warnings, user_config_path, with_env_overrides,
    ENV_CREDENTIALS_CONFIG, ENV_SERVER_ADDRESS, ENV_TIMEOUT_SECS,
};
pub use types::{Config, CredentialsConfig, ServerConfig, DEFAULT_SERVER_ADDRESS};
