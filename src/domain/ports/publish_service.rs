//! Publish Service Port
//!
//! The remote collection manager, reached over a connection that is opened
//! once per push. Dropping the connection releases it.

use async_trait::async_trait;

use crate::domain::entities::{PublishRequest, PublishResponse};
use crate::error::{ConnectionError, RpcError};

/// Unary publish call against an open connection
#[async_trait]
pub trait PublishService: Send + Sync {
    /// Submit the request and wait for the server's digest
    ///
    /// Cancellation is handled by the caller dropping the returned future.
    async fn publish_content(&self, request: &PublishRequest)
        -> Result<PublishResponse, RpcError>;
}

/// Opens connections to a collection manager
#[async_trait]
pub trait Dialer: Send + Sync {
    type Connection: PublishService;

    /// Connect to `address`; the connection is released when dropped
    async fn dial(&self, address: &str) -> Result<Self::Connection, ConnectionError>;
}
