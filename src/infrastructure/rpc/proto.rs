//! Collection manager wire messages (`collectionmanager.v1alpha1`).
//!
//! Hand-written prost messages for the subset of the collection manager API
//! this client speaks. Attribute sets travel as `google.protobuf.Struct`.

use prost::Message;

/// Fully qualified service name; the method path is `/{SERVICE}/{method}`
pub const SERVICE: &str = "collectionmanager.v1alpha1.CollectionManager";

/// Method name of the unary publish call
pub const PUBLISH_CONTENT: &str = "PublishContent";

pub const CONTENT_TYPE: &str = "application/x-protobuf";

// ---------------------------------------------------------------------------
// Publish
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Message)]
pub struct AuthConfig {
    #[prost(string, tag = "1")]
    pub server_address: String,
    #[prost(string, tag = "2")]
    pub username: String,
    #[prost(string, tag = "3")]
    pub password: String,
    #[prost(string, tag = "4")]
    pub identity_token: String,
    #[prost(string, tag = "5")]
    pub registry_token: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct File {
    #[prost(string, tag = "1")]
    pub file: String,
    #[prost(message, optional, tag = "2")]
    pub attributes: Option<prost_types::Struct>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Collection {
    #[prost(message, repeated, tag = "1")]
    pub files: Vec<File>,
}

#[derive(Clone, PartialEq, Message)]
pub struct PublishRequest {
    #[prost(string, tag = "1")]
    pub source: String,
    #[prost(string, tag = "2")]
    pub destination: String,
    #[prost(message, optional, tag = "3")]
    pub collection: Option<Collection>,
    #[prost(message, optional, tag = "4")]
    pub auth: Option<AuthConfig>,
}

#[derive(Clone, PartialEq, Message)]
pub struct PublishResponse {
    #[prost(string, tag = "1")]
    pub digest: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error body returned with a non-success HTTP status
#[derive(Clone, PartialEq, Message)]
pub struct Status {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: String,
}

/// Path component for `method` on the collection manager service
pub fn method_path(method: &str) -> String {
    format!("/{}/{}", SERVICE, method)
}
