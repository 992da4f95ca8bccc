//! Credential resolver implementations

mod docker_config;

pub use docker_config::{registry_host, DockerConfigResolver, DOCKER_CONFIG_VAR};
