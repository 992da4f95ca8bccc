//! Publish Request/Response Entities

use super::{AuthConfig, Collection};
use crate::domain::value_objects::{Digest, SourcePath};

/// Everything the collection manager needs to publish a workspace
///
/// Built once per invocation and not mutated after it is handed to the
/// publish service.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishRequest {
    pub source: SourcePath,
    pub destination: String,
    pub collection: Collection,
    pub auth: AuthConfig,
}

/// Server reply to a successful publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResponse {
    pub digest: Digest,
}

impl PublishResponse {
    pub fn new(digest: impl Into<Digest>) -> Self {
        Self {
            digest: digest.into(),
        }
    }
}
