use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mf")]
#[command(about = "Browse the movie catalog and manage your favorites")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config.toml and MF_API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
