use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// Earshot voice question server
#[derive(Debug, Parser)]
#[command(name = "earshot", about = "Transcribe uploaded audio and answer it with a language model")]
pub struct Args {
    /// Path to configuration file (optional; defaults apply when missing)
    #[arg(short, long, default_value = "earshot.toml", env = "EARSHOT_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "EARSHOT_LISTEN")]
    pub listen: Option<SocketAddr>,
}
