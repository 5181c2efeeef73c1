//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use timeline_tictactoe::TuiConfig;
use tracing::{debug, error, info, instrument};

use app::App;
use ui::ScreenLayout;

/// Runs the interactive game until the user quits.
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    let res = run_game(&mut terminal, App::new(config));

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// Restores the terminal when dropped. Kills raw mode on every exit path.
struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    fn new(restore: fn()) -> Self {
        Self { restore }
    }

    /// Enables raw mode and the alternate screen.
    ///
    /// The guard exists as soon as raw mode is on, so a failure while
    /// entering the alternate screen still restores the terminal.
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self::new(restore_terminal);
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        (self.restore)();
    }
}

/// Best-effort terminal restore; safe to call more than once.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    );
}

/// Restores the terminal before the default hook prints a panic message.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        hook(info);
    }));
}

/// Draw, read one event, repeat.
#[instrument(skip_all)]
fn run_game(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        let area = terminal.draw(|frame| ui::draw(frame, &app))?.area;

        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, &ScreenLayout::new(area)),
            _ => {}
        }
    }

    info!(moves = app.game().history().len() - 1, "Game loop finished");
    Ok(())
}
