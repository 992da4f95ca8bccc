//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout carries only the push output.

use std::io;

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Variable holding an explicit filter directive (`debug`, `sample_client=trace`)
pub const LOG_ENV: &str = "SAMPLE_CLIENT_LOG";

/// Default filter for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber
///
/// `SAMPLE_CLIENT_LOG` wins over the verbosity flag.
pub fn init(verbose: u8, json: bool) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_directive(verbose).into());

    let text_layer = (!json).then(|| fmt::layer().with_writer(io::stderr).with_target(false));
    let json_layer = json.then(|| fmt::layer().json().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .try_init()
}
