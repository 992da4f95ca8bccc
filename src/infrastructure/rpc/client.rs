//! HTTP transport for the collection manager.
//!
//! Each call is a unary `POST {server}/{service}/{method}` with a
//! protobuf-encoded body. Dialing parses the address and probes the server
//! with a TCP connect so an unreachable server fails before any request is
//! built.
//!
//! Bodies are bare protobuf messages, not gRPC frames; a gRPC-only server
//! will reject them.

use std::time::Duration;

use async_trait::async_trait;
use prost::Message;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tokio::net::TcpStream;
use tracing::{debug, info};
use url::Url;

use super::proto;
use crate::domain::entities::{PublishRequest, PublishResponse};
use crate::domain::ports::{Dialer, PublishService};
use crate::error::{ConnectionError, RpcError};

/// Default bound on the dial step
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Dials collection managers over HTTP
#[derive(Debug, Clone)]
pub struct HttpDialer {
    connect_timeout: Duration,
}

impl Default for HttpDialer {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl HttpDialer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Parse a server address into a base URL
///
/// Accepts `http://host:port`, `https://host:port` (optionally with a path
/// prefix) or a bare `host:port`, which is treated as plain HTTP.
pub fn parse_address(address: &str) -> Result<Url, ConnectionError> {
    let invalid = |reason: &str| ConnectionError::InvalidAddress {
        address: address.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(invalid("address is empty"));
    }

    let url = if trimmed.contains("://") {
        Url::parse(trimmed)
    } else {
        Url::parse(&format!("http://{}", trimmed))
    }
    .map_err(|e| invalid(&e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(&format!("unsupported scheme '{}'", other))),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host"));
    }

    Ok(url)
}

fn endpoint(base: &Url, method: &str) -> Result<Url, ConnectionError> {
    let joined = format!(
        "{}{}",
        base.as_str().trim_end_matches('/'),
        proto::method_path(method)
    );
    Url::parse(&joined).map_err(|e| ConnectionError::InvalidAddress {
        address: base.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl Dialer for HttpDialer {
    type Connection = HttpConnection;

    async fn dial(&self, address: &str) -> Result<HttpConnection, ConnectionError> {
        let base = parse_address(address)?;
        let host = base.host_str().unwrap_or_default();
        let port = base.port_or_known_default().unwrap_or(80);
        let authority = format!("{}:{}", host, port);

        match tokio::time::timeout(self.connect_timeout, TcpStream::connect(&authority)).await {
            Err(_) => {
                return Err(ConnectionError::Timeout {
                    address: address.to_string(),
                    duration: self.connect_timeout,
                })
            }
            Ok(Err(e)) => {
                return Err(ConnectionError::Unreachable {
                    address: address.to_string(),
                    reason: e.to_string(),
                })
            }
            Ok(Ok(_probe)) => {}
        }

        let client = reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(|e| ConnectionError::Unreachable {
                address: address.to_string(),
                reason: e.to_string(),
            })?;

        let publish_url = endpoint(&base, proto::PUBLISH_CONTENT)?;
        info!(address = %base, "connected to collection manager");

        Ok(HttpConnection {
            client,
            address: base.to_string(),
            publish_url,
        })
    }
}

/// Open connection to one collection manager
///
/// Dropping it releases the underlying connection pool.
pub struct HttpConnection {
    client: reqwest::Client,
    address: String,
    publish_url: Url,
}

impl HttpConnection {
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Drop for HttpConnection {
    fn drop(&mut self) {
        debug!(address = %self.address, "closing connection");
    }
}

fn is_protobuf(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with(proto::CONTENT_TYPE))
}

#[async_trait]
impl PublishService for HttpConnection {
    async fn publish_content(
        &self,
        request: &PublishRequest,
    ) -> Result<PublishResponse, RpcError> {
        let body = proto::PublishRequest::from(request).encode_to_vec();
        debug!(url = %self.publish_url, bytes = body.len(), "sending publish request");

        let response = self
            .client
            .post(self.publish_url.clone())
            .header(CONTENT_TYPE, proto::CONTENT_TYPE)
            .header(ACCEPT, proto::CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        let status = response.status();
        let protobuf = is_protobuf(&response);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        if status.is_success() {
            let decoded = proto::PublishResponse::decode(bytes.as_ref())
                .map_err(|e| RpcError::Decode(e.to_string()))?;
            return Ok(decoded.into());
        }

        if protobuf {
            if let Ok(server_status) = proto::Status::decode(bytes.as_ref()) {
                return Err(RpcError::Status {
                    code: server_status.code,
                    message: server_status.message,
                });
            }
        }

        let text = String::from_utf8_lossy(&bytes).trim().to_string();
        Err(RpcError::Status {
            code: i32::from(status.as_u16()),
            message: if text.is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                text
            },
        })
    }
}
