//! Credential Resolver Port
//!
//! Looks up the credentials to send along with a publish request. Where
//! credentials live (a Docker config file, a keychain, a test fixture) is an
//! infrastructure concern.

use crate::domain::entities::AuthConfig;
use crate::error::CredentialError;

/// Resolves credentials for a destination reference
///
/// Implementations must not perform network I/O on the publish connection;
/// a failed lookup aborts the push before anything is sent.
pub trait CredentialResolver: Send + Sync {
    /// Credentials for `destination` (e.g. `registry.example/test:latest`)
    fn get_credentials(&self, destination: &str) -> Result<AuthConfig, CredentialError>;
}

/// Resolver that always returns the same credentials
///
/// Used when credentials are supplied out of band, and by tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(pub AuthConfig);

impl CredentialResolver for StaticCredentials {
    fn get_credentials(&self, _destination: &str) -> Result<AuthConfig, CredentialError> {
        Ok(self.0.clone())
    }
}
