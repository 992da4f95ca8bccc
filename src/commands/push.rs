use std::path::Path;

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use sample_client::application::PushOptions;
use sample_client::config::{self, Config};
use sample_client::presentation::factory;

/// Connection flags given on the command line
#[derive(Debug, Default)]
pub struct ServerFlags {
    pub server_address: Option<String>,
    pub timeout: Option<u64>,
}

pub async fn cmd_push(
    args: &[String],
    flags: ServerFlags,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let (config, warnings) = config::load_or_default(config_path)?;
    for warning in &warnings {
        warn!("{}", warning);
    }
    let config = apply_flags(config, flags);
    debug!(address = %config.server.address, timeout = ?config.timeout(), "effective config");

    let mut options = PushOptions::new(config.server.address.clone(), config.timeout());
    options.complete(args)?;

    // Ctrl+C cancels the in-flight push
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || on_interrupt.cancel()) {
        warn!(error = %e, "cannot install Ctrl+C handler");
    }

    let use_case = factory::create_push_use_case(&config);
    let sink = factory::create_event_sink(json);
    use_case.run(&options, &cancel, sink.as_ref()).await?;

    Ok(())
}

/// Flags override env and file values
fn apply_flags(mut config: Config, flags: ServerFlags) -> Config {
    if let Some(address) = flags.server_address {
        config.server.address = address;
    }
    if let Some(secs) = flags.timeout {
        config.server.timeout_secs = Some(secs);
    }
    config
}
