//! Domain ↔ wire conversions.

use prost_types::value::Kind;

use super::proto;
use crate::domain::entities::{AuthConfig, Collection, FileEntry, PublishRequest, PublishResponse};
use crate::domain::value_objects::{AttributeValue, Attributes};

fn value_to_wire(value: &AttributeValue) -> prost_types::Value {
    let kind = match value {
        AttributeValue::Bool(b) => Kind::BoolValue(*b),
        AttributeValue::Number(n) => Kind::NumberValue(*n),
        AttributeValue::String(s) => Kind::StringValue(s.clone()),
        AttributeValue::List(items) => Kind::ListValue(prost_types::ListValue {
            values: items.iter().map(value_to_wire).collect(),
        }),
        AttributeValue::Map(entries) => Kind::StructValue(prost_types::Struct {
            fields: entries
                .iter()
                .map(|(k, v)| (k.clone(), value_to_wire(v)))
                .collect(),
        }),
    };
    prost_types::Value { kind: Some(kind) }
}

impl From<&Attributes> for prost_types::Struct {
    fn from(attributes: &Attributes) -> Self {
        prost_types::Struct {
            fields: attributes
                .iter()
                .map(|(k, v)| (k.clone(), value_to_wire(v)))
                .collect(),
        }
    }
}

impl From<&FileEntry> for proto::File {
    fn from(entry: &FileEntry) -> Self {
        proto::File {
            file: entry.file.clone(),
            attributes: Some((&entry.attributes).into()),
        }
    }
}

impl From<&Collection> for proto::Collection {
    fn from(collection: &Collection) -> Self {
        proto::Collection {
            files: collection.files.iter().map(proto::File::from).collect(),
        }
    }
}

impl From<&AuthConfig> for proto::AuthConfig {
    fn from(auth: &AuthConfig) -> Self {
        proto::AuthConfig {
            server_address: auth.server_address.clone(),
            username: auth.username.clone(),
            password: auth.password.clone(),
            identity_token: auth.identity_token.clone(),
            registry_token: auth.registry_token.clone(),
        }
    }
}

impl From<&PublishRequest> for proto::PublishRequest {
    fn from(request: &PublishRequest) -> Self {
        proto::PublishRequest {
            source: request.source.as_str().to_string(),
            destination: request.destination.clone(),
            collection: Some((&request.collection).into()),
            auth: Some((&request.auth).into()),
        }
    }
}

impl From<proto::PublishResponse> for PublishResponse {
    fn from(response: proto::PublishResponse) -> Self {
        PublishResponse::new(response.digest)
    }
}
