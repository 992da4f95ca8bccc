//! Domain Entities
//!
//! - `Collection` / `FileEntry` - the content description being published
//! - `AuthConfig` - registry credentials attached to a request
//! - `PublishRequest` / `PublishResponse` - the publish exchange

mod collection;
mod credentials;
mod request;

pub use collection::{Collection, FileEntry};
pub use credentials::AuthConfig;
pub use request::{PublishRequest, PublishResponse};
