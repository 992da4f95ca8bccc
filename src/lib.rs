//! sample-client - publish a workspace directory to a collection manager
//!
//! Builds a collection from a fixed set of attribute rules, resolves
//! credentials for the destination, and asks the collection manager to
//! publish the source directory. The server answers with a content digest.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{PushOptions, PushUseCase};
pub use config::Config;
pub use domain::entities::{AuthConfig, Collection, FileEntry, PublishRequest, PublishResponse};
pub use domain::policies::{AttributeRule, AttributeRules};
pub use domain::value_objects::{AttributeValue, Attributes, Digest, SourcePath};
pub use error::{ConfigError, ConnectionError, CredentialError, PushError, PushResult, RpcError};
