//! Content Digest Value Object
//!
//! The identifier the collection manager returns for a published collection.
//! The client never computes digests; it only carries and prints them.

use std::fmt;

/// Content digest as returned by the server (`algorithm:encoded`)
///
/// The raw string is kept verbatim so it prints exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest(String);

impl Digest {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Full digest string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Digest {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Digest {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
