//! Terminal UI: the presentation layer over [`GameEngine`](crate::GameEngine).
//!
//! Rendering reads only derived engine state. Key presses map to the
//! engine's three operations: place a mark, jump, flip the move order.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::move_cursor;
pub use ui::draw;

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped, including during unwinding.
struct TerminalGuard;

impl TerminalGuard {
    /// Enables raw mode and enters the alternate screen.
    ///
    /// Once raw mode is on the guard exists, so a failure entering the
    /// alternate screen still leaves raw mode again.
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        restore_terminal();
    }
}

/// Leaves the alternate screen and shows the cursor again.
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = leave_screen(&mut io::stdout());
}

/// Chains a panic hook that restores the terminal before the previous
/// hook prints the panic message.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

/// Runs the interactive game until the user quits.
#[instrument(skip_all, fields(order = %config.order()))]
pub fn run(config: &GameConfig) -> Result<()> {
    info!("Starting terminal UI");

    install_panic_hook();
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(*config.order()));
    drop(guard);

    if let Err(e) = &res {
        error!(error = %e, "Terminal UI failed");
    }
    info!("Terminal UI closed");
    res
}

fn run_app(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
