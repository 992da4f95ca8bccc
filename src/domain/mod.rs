//! Domain Layer
//!
//! The publish flow's vocabulary, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Collection, credentials, publish request/response
//! - `value_objects/` - Attribute values, digests, source paths
//! - `policies/` - The attribute rule table
//! - `ports/` - Interfaces for credentials, transport and output
//!
//! All I/O goes through trait-defined ports.

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;
