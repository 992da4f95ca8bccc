//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::PushUseCase;
use crate::config::Config;
use crate::domain::ports::PushEventSink;
use crate::infrastructure::{DockerConfigResolver, HttpDialer, JsonEventSink, TextEventSink};

/// Type alias for the concrete PushUseCase with all dependencies
pub type ConcretePushUseCase = PushUseCase<HttpDialer, DockerConfigResolver>;

/// Create a push use case with all dependencies wired up
pub fn create_push_use_case(config: &Config) -> ConcretePushUseCase {
    PushUseCase::new(HttpDialer::new(), create_credential_resolver(config))
}

/// Credential resolver for the configured store, or the Docker default
pub fn create_credential_resolver(config: &Config) -> DockerConfigResolver {
    match &config.credentials.config_path {
        Some(path) => DockerConfigResolver::with_path(path),
        None => DockerConfigResolver::new(),
    }
}

/// Event sink writing to stdout: NDJSON with `json`, plain text otherwise
pub fn create_event_sink(json: bool) -> Box<dyn PushEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(TextEventSink::stdout())
    }
}
