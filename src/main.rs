//! Tic-tac-toe scoreboard - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_scoreboard::{
    AppConfig, DEFAULT_LOG_FILTER, RestScoreboardClient, ScoreboardApi, SessionStore,
    match_summary, run_tui, scoreboard_table, validate_players,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?.apply_env();
    if let Some(url) = cli.base_url {
        config = config.with_base_url(url);
    }

    let command = cli.command.unwrap_or(Command::Tui);
    // The TUI logs to a file instead.
    if command != Command::Tui {
        init_stderr_logging();
    }
    run_command(&config, command).await
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the selected command.
#[instrument(skip(config), fields(base_url = %config.base_url()))]
async fn run_command(config: &AppConfig, command: Command) -> Result<()> {
    let session = SessionStore::new(config.session_path());

    match command {
        Command::Tui => run_tui(config).await?,
        Command::List { json } => {
            let client = RestScoreboardClient::from_config(config)?;
            let records = client.list_matches().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print!("{}", scoreboard_table(&records));
            }
        }
        Command::Register { player1, player2 } => {
            let new_match = validate_players(&player1, &player2)?;
            let client = RestScoreboardClient::from_config(config)?;
            let record = client.create_match(&new_match).await?;
            session.save(&record.id)?;
            info!(match_id = %record.id, "Match registered");
            println!("{}", record.id);
        }
        Command::Show { id } => {
            let client = RestScoreboardClient::from_config(config)?;
            let record = client.get_match(&id).await?;
            println!("{}", match_summary(&record));
        }
        Command::Clear { id } => {
            let client = RestScoreboardClient::from_config(config)?;
            client.clear_match(&id).await?;
            println!("Cleared {}", id);
        }
        Command::Stop => {
            session.clear()?;
            println!("Session cleared");
        }
    }
    Ok(())
}
