//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PushUseCase` - Dial, build the collection, resolve credentials, publish

pub mod push;

pub use push::{PushOptions, PushUseCase};
