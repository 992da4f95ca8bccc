//! Push Event Port
//!
//! Everything the push flow reports to the user goes through here, so the
//! same flow can print plain text, emit NDJSON, or stay silent in tests.

use std::io;

use crate::domain::value_objects::{AttributeValue, Digest};

/// Event emitted during a push
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    /// An attribute was attached to a file pattern
    AttributeApplied {
        pattern: String,
        key: String,
        value: AttributeValue,
    },

    /// The server accepted the collection
    Published { digest: Digest },
}

/// Receives push events
pub trait PushEventSink: Send + Sync {
    /// Handle an event; a write failure aborts the push
    fn on_event(&self, event: PushEvent) -> io::Result<()>;
}

/// Sink that drops every event
pub struct NoopEventSink;

impl PushEventSink for NoopEventSink {
    fn on_event(&self, _event: PushEvent) -> io::Result<()> {
        Ok(())
    }
}
