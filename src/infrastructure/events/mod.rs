//! Event Sink Implementations
//!
//! Concrete implementations of `PushEventSink`:
//! - TextEventSink: notices and digest as plain lines
//! - JsonEventSink: NDJSON output for CI/automation

mod json;
mod text;

pub use json::JsonEventSink;
pub use text::TextEventSink;
