//! Command-line interface for timeline_tictactoe.

use clap::{Parser, Subcommand};
use timeline_tictactoe::GameAction;

/// Tic-tac-toe with a move history you can jump around in
#[derive(Parser, Debug)]
#[command(name = "timeline_tictactoe")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (default)
    Play,

    /// Apply actions to a fresh game and print the result
    Replay {
        /// Print the final view as JSON
        #[arg(long)]
        json: bool,

        /// Actions: a cell 0-8, `jump:N`, or `reset`
        #[arg(value_name = "ACTION")]
        actions: Vec<GameAction>,
    },
}
