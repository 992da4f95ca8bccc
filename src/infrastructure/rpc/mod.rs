//! Collection manager RPC
//!
//! - `proto` - prost wire messages
//! - `convert` - domain ↔ wire conversions
//! - `client` - HTTP dialer and connection implementing `PublishService`

mod client;
mod convert;
pub mod proto;

pub use client::{parse_address, HttpConnection, HttpDialer, DEFAULT_CONNECT_TIMEOUT};
