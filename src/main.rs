//! Timeline Tic-Tac-Toe - CLI entry point
//!
//! Plays in the terminal by default; `replay` applies actions headlessly.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use timeline_tictactoe::{Game, GameAction, TuiConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Replay { json, actions } => run_replay(&config, json, &actions),
    }
}

/// Filter from `RUST_LOG`, falling back to the configured one.
fn env_filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the interactive terminal game
fn run_play(config: &TuiConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tui::run_tui(config)
}

/// Apply `actions` to a fresh game and print the final view
#[instrument(skip(config, actions), fields(count = actions.len()))]
fn run_replay(config: &TuiConfig, json: bool, actions: &[GameAction]) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    let output = render_replay(actions, json)?;
    print!("{}", output);

    Ok(())
}

/// Folds `actions` into a fresh game and renders the final view.
fn render_replay(actions: &[GameAction], json: bool) -> Result<String> {
    let game = actions
        .iter()
        .fold(Game::new(), |game, action| game.reduce(*action));
    let view = game.view();
    info!(status = %view.status, cursor = view.cursor, "Replay finished");

    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&view)?))
    } else {
        Ok(view.to_string())
    }
}
