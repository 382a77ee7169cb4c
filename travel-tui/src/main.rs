mod api;
mod app;
mod cli;
mod config;
mod runtime;
mod ui;

use anyhow::Result;
use api::ApiClient;
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::TravelConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let config = TravelConfig::load()?;
            let api_url = cli.api_url.unwrap_or_else(|| config.api_url());
            run(api_url).await
        }
        Commands::ConfigPath => {
            let path = TravelConfig::config_path()?;
            if !path.exists() {
                TravelConfig::default().save()?;
                println!("Created default config at: {}", path.display());
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}

async fn run(api_url: String) -> Result<()> {
    let client = ApiClient::new(&api_url)?;
    let mut app = App::new(client.base_url().as_str().trim_end_matches('/'));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
