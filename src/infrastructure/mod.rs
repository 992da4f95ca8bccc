//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `rpc/` - HTTP transport and protobuf wire messages
//! - `credentials/` - Credential stores (Docker config)
//! - `events/` - Push event sinks (text, JSON)

pub mod credentials;
pub mod events;
pub mod rpc;

// Re-export for convenience
pub use credentials::DockerConfigResolver;
pub use events::{JsonEventSink, TextEventSink};
pub use rpc::{HttpConnection, HttpDialer};
