use std::path::PathBuf;

use clap::Parser;

/// Cadenza TTS Studio
#[derive(Debug, Parser)]
#[command(name = "cadenza", about = "Self-hosted text-to-speech studio")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "cadenza.toml", env = "CADENZA_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "CADENZA_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Emit logs as JSON
    #[arg(long, env = "CADENZA_LOG_JSON")]
    pub log_json: bool,
}
