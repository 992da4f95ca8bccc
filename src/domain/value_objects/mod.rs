//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod attribute;
mod config_warning;
mod digest;
mod source_path;

pub use attribute::{AttributeValue, Attributes, EncodingIssue};
pub use config_warning::ConfigWarning;
pub use digest::Digest;
pub use source_path::{SourcePath, SourcePathError};
