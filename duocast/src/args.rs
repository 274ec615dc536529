use std::path::PathBuf;

use clap::Parser;

/// Duocast dialogue synthesis service
#[derive(Debug, Parser)]
#[command(name = "duocast", about = "Turns dialogue scripts into long-form audio via cloud TTS")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "duocast.toml", env = "DUOCAST_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "DUOCAST_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
