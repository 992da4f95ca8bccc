//! Common test utilities for sample-client integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working directory and HOME, plus CLI helpers
//! - `FakeServer`: in-process collection manager answering PublishContent
//! - Fixtures: Docker config snippets

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod server;

pub use env::*;
pub use fixtures::*;
pub use server::*;
