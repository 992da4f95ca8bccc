//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

pub use crate::domain::value_objects::ConfigWarning;

use super::types::Config;

pub const ENV_SERVER_ADDRESS: &str = "SAMPLE_CLIENT_SERVER_ADDRESS";
pub const ENV_TIMEOUT_SECS: &str = "SAMPLE_CLIENT_TIMEOUT_SECS";
pub const ENV_CREDENTIALS_CONFIG: &str = "SAMPLE_CLIENT_CREDENTIALS_CONFIG";

const KNOWN_KEYS: &[&str] = &["server", "address", "timeout_secs", "credentials", "config_path"];

/// Load configuration and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.server.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidValue {
            key: "server.timeout_secs".to_string(),
            value: "0".to_string(),
        });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|key_path| {
            let key = key_path
                .rsplit('.')
                .next()
                .unwrap_or(key_path.as_str())
                .to_string();
            ConfigWarning {
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key_path,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from the explicit file, else the user config, else defaults.
///
/// An explicit path must exist; a missing user config is not an error.
/// Environment overrides are applied on top.
pub fn load_or_default(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => match user_config_path().filter(|p| p.exists()) {
            Some(path) => {
                debug!(path = %path.display(), "loading user config");
                load_with_warnings(&path)?
            }
            None => (Config::default(), Vec::new()),
        },
    };

    Ok((with_env_overrides(config)?, warnings))
}

/// `<config_dir>/sample-client/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sample-client").join("config.toml"))
}

/// Apply SAMPLE_CLIENT_* overrides from the process environment
pub fn with_env_overrides(config: Config) -> Result<Config, ConfigError> {
    apply_env(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable source
///
/// Empty values are ignored.
pub fn apply_env<F>(mut config: Config, var: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| var(name).filter(|v| !v.trim().is_empty());

    if let Some(address) = var(ENV_SERVER_ADDRESS) {
        config.server.address = address;
    }

    if let Some(secs) = var(ENV_TIMEOUT_SECS) {
        let parsed = secs
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_TIMEOUT_SECS.to_string(),
                value: secs.clone(),
            })?;
        config.server.timeout_secs = Some(parsed);
    }

    if let Some(path) = var(ENV_CREDENTIALS_CONFIG) {
        config.credentials.config_path = Some(PathBuf::from(path));
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
