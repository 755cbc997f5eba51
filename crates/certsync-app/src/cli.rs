use clap::Parser;
use std::path::PathBuf;

/// certsync: push renewed TLS certificates to the CDN when they change.
#[derive(Parser, Debug)]
#[command(name = "certsync", version, about)]
pub struct Args {
    /// Config file path (default: platform config dir).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Dotenv file with credentials (default: $DOTENV_PATH, then ./.env).
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Upload once and exit instead of watching.
    #[arg(long)]
    pub once: bool,

    /// Print the resolved config (secret redacted) and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
