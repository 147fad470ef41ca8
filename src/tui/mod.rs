//! TUI shell: terminal lifecycle and the event loop.

pub mod app;
mod components;
mod page;
pub mod paint;
pub mod sections;
mod ui;

use std::{
    io::{stdout, Stdout},
    time::Duration,
};

use app::App;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::time::sleep;

use crate::{
    error::Result,
    theme::{ThemeScope, ThemeStore},
};

/// Raw-mode/alternate-screen guard. Restores the terminal on drop, the
/// panic path included.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> std::io::Result<Self> {
        enable_raw_mode()?;
        stdout()
            .execute(EnterAlternateScreen)?
            .execute(EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(DisableMouseCapture);
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Run the portfolio TUI until the user quits.
pub async fn run(store: ThemeStore, tick_rate: Duration) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal: Terminal<CrosstermBackend<Stdout>> =
        Terminal::new(CrosstermBackend::new(stdout()))?;

    let _scope = ThemeScope::enter(&store);
    let mut app = App::new();
    let mut event_stream = EventStream::new();

    tracing::info!(theme = %store.active().name, "portfolio started");

    while !app.should_exit() {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        tokio::select! {
            Some(Ok(event)) = event_stream.next() => {
                app.handle_event(&event);
            }
            () = sleep(tick_rate) => {
                app.on_tick(tick_rate);
            }
        }
    }

    Ok(())
}
