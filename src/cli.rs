use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// sample-client - publish a workspace directory to a collection manager
#[derive(Parser, Debug)]
#[command(name = "sample-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Collection manager address (host:port or http(s) URL)
    #[arg(long, global = true, value_name = "ADDR")]
    pub server_address: Option<String>,

    /// Give up on the publish call after this many seconds
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Config file (default: ~/.config/sample-client/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish SRC as a collection under DST
    Push {
        /// Source directory and destination reference
        #[arg(value_names = ["SRC", "DST"], num_args = 2, required = true)]
        args: Vec<String>,
    },
}
