//! Application state for the TUI.
//!
//! This module defines the UI-only state that drives the TUI:
//! - `AppState`: current route, selection, input buffer, status line
//! - `InputMode`: whether keys navigate or type into a prompt
//!
//! The todo data itself lives in the `TodoStore` owned by `App`.

use super::route::Route;

/// UI state that is not part of the store.
#[derive(Debug, Default)]
pub struct AppState {
    /// Currently active view
    pub route: Route,
    /// Current input mode
    pub mode: InputMode,
    /// Index into the filtered todo list
    pub selected: usize,
    /// Text typed into the current prompt
    pub input: String,
    /// One-line feedback shown in the footer
    pub status: Option<String>,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new state on the given route.
    pub fn new(route: Route) -> Self {
        Self {
            route,
            ..Self::default()
        }
    }

    /// Keep the selection inside a list of `len` items.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }
}

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands
    #[default]
    Normal,
    /// Typing a search string (applied live)
    Search,
    /// Typing the title of a new todo
    Add,
}

impl InputMode {
    pub fn prompt(&self) -> &'static str {
        match self {
            InputMode::Normal => "",
            InputMode::Search => "Search: ",
            InputMode::Add => "New todo: ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_on_route() {
        let state = AppState::new(Route::Stats);
        assert_eq!(state.route, Route::Stats);
        assert_eq!(state.mode, InputMode::Normal);
        assert_eq!(state.selected, 0);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = AppState::default();
        state.select_previous();
        assert_eq!(state.selected, 0);

        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, 2);

        state.clamp_selection(1);
        assert_eq!(state.selected, 0);

        state.select_next(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_prompts() {
        assert_eq!(InputMode::Search.prompt(), "Search: ");
        assert_eq!(InputMode::Add.prompt(), "New todo: ");
        assert!(InputMode::Normal.prompt().is_empty());
    }
}
