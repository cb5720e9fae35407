//! Command-line interface for tictactoe_scoreboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tic-tac-toe scoreboard - two players, one terminal, scores kept online
#[derive(Parser, Debug)]
#[command(name = "tictactoe_scoreboard")]
#[command(about = "Play tic-tac-toe and keep score on a remote scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(long, default_value = "tictactoe_scoreboard.toml")]
    pub config: PathBuf,

    /// Scoreboard base URL, overriding config and environment
    #[arg(long)]
    pub base_url: Option<String>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the terminal UI
    Tui,

    /// Print the scoreboard
    List {
        /// Print the raw records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register two players, start a match and remember it locally
    Register {
        /// Player 1 (plays X)
        player1: String,

        /// Player 2 (plays O)
        player2: String,
    },

    /// Print one match
    Show {
        /// Match id
        id: String,
    },

    /// Reset a match's counters
    Clear {
        /// Match id
        id: String,
    },

    /// Forget the locally remembered match
    Stop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::parse_from(["tictactoe_scoreboard"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("tictactoe_scoreboard.toml"));
    }

    #[test]
    fn test_global_flags_and_register() {
        let cli = Cli::parse_from([
            "tictactoe_scoreboard",
            "--base-url",
            "http://localhost:8080",
            "register",
            "Alice",
            "Bob",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(
            cli.command,
            Some(Command::Register {
                player1: "Alice".to_string(),
                player2: "Bob".to_string(),
            })
        );
    }

    #[test]
    fn test_list_json_flag() {
        let cli = Cli::parse_from(["tictactoe_scoreboard", "list", "--json"]);
        assert_eq!(cli.command, Some(Command::List { json: true }));
    }
}
