use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "travel-tui")]
#[command(about = "Terminal client for travel-api search")]
pub struct Cli {
    /// API base URL, overriding environment and config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the search UI (default)
    Run,
    /// Print config path and create default file if missing
    ConfigPath,
}
