//! Push Use Case
//!
//! Orchestrates a single publish:
//! 1. Dial the collection manager
//! 2. Resolve the source path
//! 3. Build the collection from the attribute rules (and check it encodes)
//! 4. Resolve credentials for the destination
//! 5. Send the publish request, racing cancellation and the timeout
//! 6. Report the digest
//!
//! Any failure aborts the whole push. The connection is held by value, so it
//! is released exactly once whichever step returns.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::domain::entities::{Collection, FileEntry, PublishRequest, PublishResponse};
use crate::domain::policies::AttributeRules;
use crate::domain::ports::{CredentialResolver, Dialer, PublishService, PushEvent, PushEventSink};
use crate::domain::value_objects::SourcePath;
use crate::error::{ConnectionError, PushError, PushResult, RpcError};

use super::options::PushOptions;

/// Push use case
///
/// Parameterized by its ports so tests can substitute the transport and the
/// credential store.
pub struct PushUseCase<D, C>
where
    D: Dialer,
    C: CredentialResolver,
{
    dialer: D,
    credentials: C,
    rules: AttributeRules,
    working_dir: Option<PathBuf>,
}

impl<D, C> PushUseCase<D, C>
where
    D: Dialer,
    C: CredentialResolver,
{
    pub fn new(dialer: D, credentials: C) -> Self {
        Self {
            dialer,
            credentials,
            rules: AttributeRules::sample(),
            working_dir: None,
        }
    }

    /// Replace the attribute rule table
    pub fn with_rules(mut self, rules: AttributeRules) -> Self {
        self.rules = rules;
        self
    }

    /// Resolve relative sources against `dir` instead of the process cwd
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Execute the push
    pub async fn run(
        &self,
        options: &PushOptions,
        cancel: &CancellationToken,
        sink: &dyn PushEventSink,
    ) -> PushResult<PublishResponse> {
        let connection = self.connect(&options.server_address, cancel).await?;

        let source = self.resolve_source(&options.source)?;
        debug!(source = %source, "resolved source path");

        let collection = self.build_collection(sink)?;

        let auth = self.credentials.get_credentials(&options.destination)?;
        debug!(destination = %options.destination, "resolved credentials");

        let request = PublishRequest {
            source,
            destination: options.destination.clone(),
            collection,
            auth,
        };

        info!(
            destination = %request.destination,
            files = request.collection.len(),
            "publishing collection"
        );
        let response = invoke(
            connection.publish_content(&request),
            cancel,
            options.timeout,
        )
        .await?;
        info!(digest = %response.digest, "collection published");

        sink.on_event(PushEvent::Published {
            digest: response.digest.clone(),
        })?;

        Ok(response)
    }

    async fn connect(
        &self,
        address: &str,
        cancel: &CancellationToken,
    ) -> PushResult<D::Connection> {
        debug!(address, "dialing collection manager");
        let connection = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ConnectionError::Cancelled {
                address: address.to_string(),
            }),
            result = self.dialer.dial(address) => result,
        }?;
        Ok(connection)
    }

    fn resolve_source(&self, source: &Path) -> PushResult<SourcePath> {
        let base = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|e| PushError::PathResolution {
                path: source.to_path_buf(),
                reason: format!("cannot determine current directory: {}", e),
            })?,
        };

        SourcePath::resolve(source, &base).map_err(|e| PushError::PathResolution {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Single pass: announce each attribute, then add the rule's entry
    fn build_collection(&self, sink: &dyn PushEventSink) -> PushResult<Collection> {
        let mut collection = Collection::new();

        for rule in self.rules.iter() {
            for (key, value) in &rule.attributes {
                sink.on_event(PushEvent::AttributeApplied {
                    pattern: rule.pattern.clone(),
                    key: key.clone(),
                    value: value.clone(),
                })?;
            }

            rule.attributes
                .check_encodable()
                .map_err(|issue| PushError::AttributeEncoding {
                    pattern: rule.pattern.clone(),
                    key: issue.key,
                    reason: issue.reason,
                })?;

            collection.push(FileEntry::new(rule.pattern.clone(), rule.attributes.clone()));
        }

        Ok(collection)
    }
}

/// Await the publish call unless cancelled or timed out first
async fn invoke<F>(
    call: F,
    cancel: &CancellationToken,
    timeout: Option<Duration>,
) -> Result<PublishResponse, RpcError>
where
    F: Future<Output = Result<PublishResponse, RpcError>>,
{
    let bounded = async {
        match timeout {
            Some(duration) => tokio::time::timeout(duration, call)
                .await
                .unwrap_or(Err(RpcError::Timeout { duration })),
            None => call.await,
        }
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(RpcError::Cancelled),
        result = bounded => result,
    }
}
