//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal and the app. It runs the main loop:
//! render → poll for a key → handle it → repeat.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use eyre::Result;
use log::info;

use super::Tui;
use super::app::App;
use super::views::render;

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    terminal: Tui,
    app: App,
    /// How long to wait for input before redrawing
    tick_rate: Duration,
}

impl TuiRunner {
    pub fn new(terminal: Tui, app: App, tick_rate_ms: u64) -> Self {
        Self {
            terminal,
            app,
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Run the main TUI loop until the user quits, then hand back the app.
    pub fn run(mut self) -> Result<App> {
        info!("Starting TUI main loop on {}", self.app.state().route);

        loop {
            self.terminal.draw(|f| render(&self.app, f))?;

            // Redraw on timeout so time-dependent state (overdue) stays fresh
            if !event::poll(self.tick_rate)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                // Terminal will handle resize on next draw
                _ => {}
            }
        }

        info!("TUI main loop ended");
        Ok(self.app)
    }
}
