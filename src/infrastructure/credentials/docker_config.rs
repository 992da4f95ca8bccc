//! Docker config credential store
//!
//! Reads registry credentials from a Docker-style `config.json`:
//!
//! ```json
//! {
//!   "auths": {
//!     "registry.example": { "auth": "YWxpY2U6c2VjcmV0" },
//!     "https://index.docker.io/v1/": { "identitytoken": "..." }
//!   },
//!   "credHelpers": { "gcr.io": "gcloud" }
//! }
//! ```
//!
//! Credential helpers (`credsStore`, `credHelpers`) are not executed; a
//! registry delegated to one is reported as unsupported.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::AuthConfig;
use crate::domain::ports::CredentialResolver;
use crate::error::CredentialError;

/// Environment variable naming the Docker config directory
pub const DOCKER_CONFIG_VAR: &str = "DOCKER_CONFIG";

/// Registry name used for references without an explicit registry
pub const DEFAULT_REGISTRY: &str = "docker.io";

const DOCKER_HUB_ALIASES: &[&str] = &["docker.io", "index.docker.io", "registry-1.docker.io"];

#[derive(Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    auths: BTreeMap<String, AuthEntry>,
    #[serde(default, rename = "credsStore")]
    creds_store: Option<String>,
    #[serde(default, rename = "credHelpers")]
    cred_helpers: HashMap<String, String>,
}

#[derive(Default, Deserialize)]
struct AuthEntry {
    #[serde(default)]
    auth: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default, rename = "identitytoken")]
    identity_token: Option<String>,
    #[serde(default, rename = "registrytoken")]
    registry_token: Option<String>,
}

/// Credential resolver backed by a Docker config file
#[derive(Debug, Clone, Default)]
pub struct DockerConfigResolver {
    path: Option<PathBuf>,
}

impl DockerConfigResolver {
    /// Resolver reading the default location (see [`default_path`](Self::default_path))
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Resolver reading an explicit file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// `$DOCKER_CONFIG/config.json`, else `~/.docker/config.json`
    pub fn default_path() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(DOCKER_CONFIG_VAR).filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(dir).join("config.json"));
        }
        dirs::home_dir().map(|home| home.join(".docker").join("config.json"))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn load(&self) -> Result<(PathBuf, ConfigFile), CredentialError> {
        let path = self.path.clone().ok_or(CredentialError::NoStoreLocation)?;
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CredentialError::StoreNotFound { path: path.clone() }
            } else {
                CredentialError::Read {
                    path: path.clone(),
                    source: e,
                }
            }
        })?;
        let config =
            serde_json::from_str(&content).map_err(|e| CredentialError::Malformed {
                path: path.clone(),
                message: e.to_string(),
            })?;
        Ok((path, config))
    }
}

/// Registry host of a destination reference
///
/// The first path segment is a registry when it looks like a host
/// (contains `.` or `:`, or is `localhost`); otherwise the reference lives
/// on Docker Hub.
pub fn registry_host(destination: &str) -> Result<String, CredentialError> {
    let reference = strip_scheme(destination.trim());
    if reference.is_empty() {
        return Err(CredentialError::InvalidDestination {
            destination: destination.to_string(),
            reason: "destination is empty".to_string(),
        });
    }

    match reference.split_once('/') {
        Some((first, _)) if first.is_empty() => Err(CredentialError::InvalidDestination {
            destination: destination.to_string(),
            reason: "missing registry host".to_string(),
        }),
        Some((first, _)) if first.contains('.') || first.contains(':') || first == "localhost" => {
            Ok(first.to_lowercase())
        }
        _ => Ok(DEFAULT_REGISTRY.to_string()),
    }
}

fn strip_scheme(s: &str) -> &str {
    s.split_once("://").map(|(_, rest)| rest).unwrap_or(s)
}

/// Host part of an `auths` key (`https://index.docker.io/v1/` → `index.docker.io`)
fn normalize_key(key: &str) -> String {
    let without_scheme = strip_scheme(key.trim());
    without_scheme
        .split('/')
        .next()
        .unwrap_or(without_scheme)
        .to_lowercase()
}

fn candidates(host: &str) -> Vec<&str> {
    if DOCKER_HUB_ALIASES.contains(&host) {
        DOCKER_HUB_ALIASES.to_vec()
    } else {
        vec![host]
    }
}

/// Exact key first, then the first equivalent key in sorted order
fn find_entry<'a>(config: &'a ConfigFile, host: &str) -> Option<&'a AuthEntry> {
    let wanted = candidates(host);
    config.auths.get(host).or_else(|| {
        config
            .auths
            .iter()
            .find(|(key, _)| wanted.contains(&normalize_key(key).as_str()))
            .map(|(_, entry)| entry)
    })
}

fn decode_entry(path: &Path, host: &str, entry: &AuthEntry) -> Result<AuthConfig, CredentialError> {
    let mut auth = AuthConfig {
        server_address: host.to_string(),
        ..AuthConfig::default()
    };

    if let Some(encoded) = entry.auth.as_deref().filter(|s| !s.is_empty()) {
        let malformed = |message: String| CredentialError::Malformed {
            path: path.to_path_buf(),
            message,
        };
        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|e| malformed(format!("auth for '{}' is not base64: {}", host, e)))?;
        let decoded = String::from_utf8(decoded)
            .map_err(|_| malformed(format!("auth for '{}' is not UTF-8", host)))?;
        let (username, password) = decoded
            .split_once(':')
            .ok_or_else(|| malformed(format!("auth for '{}' is not 'user:password'", host)))?;
        auth.username = username.to_string();
        auth.password = password.to_string();
    }

    if let Some(username) = entry.username.as_deref().filter(|s| !s.is_empty()) {
        auth.username = username.to_string();
    }
    if let Some(password) = entry.password.as_deref().filter(|s| !s.is_empty()) {
        auth.password = password.to_string();
    }
    if let Some(token) = &entry.identity_token {
        auth.identity_token = token.clone();
    }
    if let Some(token) = &entry.registry_token {
        auth.registry_token = token.clone();
    }

    Ok(auth)
}

impl CredentialResolver for DockerConfigResolver {
    fn get_credentials(&self, destination: &str) -> Result<AuthConfig, CredentialError> {
        let host = registry_host(destination)?;
        let (path, config) = self.load()?;

        if let Some(entry) = find_entry(&config, &host) {
            let auth = decode_entry(&path, &host, entry)?;
            if !auth.is_anonymous() {
                debug!(registry = %host, store = %path.display(), "found credentials");
                return Ok(auth);
            }
        }

        if let Some(helper) = config.cred_helpers.get(&host) {
            return Err(CredentialError::HelperUnsupported {
                registry: host,
                helper: helper.clone(),
            });
        }
        if let Some(store) = config.creds_store.filter(|s| !s.is_empty()) {
            return Err(CredentialError::HelperUnsupported {
                registry: host,
                helper: store,
            });
        }

        Err(CredentialError::NotFound { registry: host })
    }
}
