//! Terminal User Interface for todos.
//!
//! Two views, addressed by path:
//! - **Todos** (`/`): the filtered, sorted todo list with inline editing
//! - **Stats** (`/stats`): counts, completion gauge, per-category progress
//!
//! The TUI runs synchronously in the main thread.

mod app;
mod route;
mod runner;
mod state;
mod views;

pub use app::App;
pub use route::Route;
pub use runner::TuiRunner;
pub use state::{AppState, InputMode};
pub use views::render;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

use crate::store::TodoStore;

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI on `route` until the user quits, returning the store.
///
/// The terminal is restored even when the loop fails.
pub fn run(store: TodoStore, route: Route, tick_rate_ms: u64, date_format: &str) -> Result<TodoStore> {
    let terminal = init_terminal()?;
    let app = App::new(store, route).with_date_format(date_format);
    let result = TuiRunner::new(terminal, app, tick_rate_ms).run();
    restore_terminal()?;
    Ok(result?.into_store())
}

/// Palette shared by the views.
pub mod colors {
    use ratatui::style::Color;

    pub const COMPLETE: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const PENDING: Color = Color::Rgb(255, 215, 0); // Gold
    pub const OVERDUE: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const DIM: Color = Color::DarkGray;

    /// Map a category color token to a terminal color.
    pub fn category(token: &str) -> Color {
        match token {
            "primary" => Color::Blue,
            "secondary" => Color::Magenta,
            "accent" => Color::Yellow,
            "success" => Color::Green,
            "warning" => Color::LightRed,
            "error" => Color::Red,
            "info" => Color::Cyan,
            _ => Color::White,
        }
    }
}
