//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod credential_resolver;
pub mod publish_service;
pub mod push_events;

pub use credential_resolver::{CredentialResolver, StaticCredentials};
pub use publish_service::{Dialer, PublishService};
pub use push_events::{NoopEventSink, PushEvent, PushEventSink};
