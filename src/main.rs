//! sample-client - publish a workspace directory to a collection manager
//!
//! Usage: sample-client [OPTIONS] push <SRC> <DST>

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::push::ServerFlags;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    sample_client::logging::init(cli.verbose, cli.json)?;

    match cli.command {
        Commands::Push { args } => {
            let flags = ServerFlags {
                server_address: cli.server_address,
                timeout: cli.timeout,
            };
            commands::push::cmd_push(&args, flags, cli.config.as_deref(), cli.json).await
        }
    }
}
