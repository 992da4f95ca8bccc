//! Error types for sample-client
//!
//! Library errors use `thiserror`; the binary surfaces them through `anyhow`.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Result type alias for push operations
pub type PushResult<T> = Result<T, PushError>;

/// Top-level error for the push flow.
///
/// Every variant aborts the invocation; nothing is retried.
#[derive(Error, Debug)]
pub enum PushError {
    /// Fewer positional arguments than `push SRC DST` requires
    #[error("not enough arguments: expected SRC and DST, got {got}")]
    InvalidArguments { got: usize },

    #[error(transparent)]
    Connection(#[from] ConnectionError),

    /// Source path could not be made absolute
    #[error("cannot resolve source path '{}': {reason}", path.display())]
    PathResolution { path: PathBuf, reason: String },

    /// An attribute value has no wire representation
    #[error("cannot encode attribute '{key}' for file pattern '{pattern}': {reason}")]
    AttributeEncoding {
        pattern: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// Notices or the digest could not be written
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl PushError {
    /// True when the push stopped because the caller cancelled it or it timed out
    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::Connection(ConnectionError::Cancelled { .. }) => true,
            Self::Rpc(e) => e.is_cancellation(),
            _ => false,
        }
    }
}

/// Failure to open a connection to the collection manager
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("invalid server address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("cannot reach server at {address}: {reason}")]
    Unreachable { address: String, reason: String },

    #[error("timed out connecting to {address} after {duration:?}")]
    Timeout { address: String, duration: Duration },

    #[error("connection to {address} cancelled")]
    Cancelled { address: String },
}

/// Failure to resolve credentials for a destination
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("credential store not found at {}", path.display())]
    StoreNotFound { path: PathBuf },

    #[error("cannot determine credential store location (no home directory)")]
    NoStoreLocation,

    #[error("failed to read credential store {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed credential store {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("no credentials found for '{registry}'")]
    NotFound { registry: String },

    #[error("credentials for '{registry}' are managed by helper '{helper}', which is not supported")]
    HelperUnsupported { registry: String, helper: String },

    #[error("invalid destination '{destination}': {reason}")]
    InvalidDestination { destination: String, reason: String },
}

/// Failure of the remote publish call
#[derive(Error, Debug)]
pub enum RpcError {
    /// Server answered with a non-success status
    #[error("server returned error (code {code}): {message}")]
    Status { code: i32, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode server response: {0}")]
    Decode(String),

    #[error("publish cancelled")]
    Cancelled,

    #[error("publish timed out after {duration:?}")]
    Timeout { duration: Duration },
}

impl RpcError {
    /// True for errors caused by the caller abandoning the call
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Timeout { .. })
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_arguments() {
        let err = PushError::InvalidArguments { got: 1 };
        assert_eq!(
            err.to_string(),
            "not enough arguments: expected SRC and DST, got 1"
        );
    }

    #[test]
    fn test_error_display_attribute_encoding() {
        let err = PushError::AttributeEncoding {
            pattern: "*.jpg".to_string(),
            key: "ratio".to_string(),
            reason: "number is not finite".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot encode attribute 'ratio' for file pattern '*.jpg': number is not finite"
        );
    }

    #[test]
    fn test_credential_error_is_transparent() {
        let err: PushError = CredentialError::NotFound {
            registry: "registry.example".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "no credentials found for 'registry.example'");
    }

    #[test]
    fn test_rpc_cancellation_classification() {
        assert!(RpcError::Cancelled.is_cancellation());
        assert!(RpcError::Timeout {
            duration: Duration::from_secs(1)
        }
        .is_cancellation());
        assert!(!RpcError::Status {
            code: 13,
            message: "internal".to_string()
        }
        .is_cancellation());
    }
}
