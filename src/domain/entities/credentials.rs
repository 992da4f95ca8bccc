//! Registry Credentials Entity
//!
//! Resolved per destination and attached to the publish request. The core
//! never inspects the values; `Debug` redacts all secrets so credentials
//! cannot leak through logs.

use std::fmt;

/// Credentials for one registry
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    /// Registry the credentials belong to
    pub server_address: String,
    pub username: String,
    pub password: String,
    pub identity_token: String,
    pub registry_token: String,
}

impl AuthConfig {
    /// Username/password credentials
    pub fn basic(
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server_address: server_address.into(),
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// True when no secret of any kind is present
    pub fn is_anonymous(&self) -> bool {
        self.username.is_empty()
            && self.password.is_empty()
            && self.identity_token.is_empty()
            && self.registry_token.is_empty()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("server_address", &self.server_address)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("identity_token", &redact(&self.identity_token))
            .field("registry_token", &redact(&self.registry_token))
            .finish()
    }
}
