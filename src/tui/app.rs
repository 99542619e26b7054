//! TUI Application
//!
//! Owns the `TodoStore` and the UI state, and turns key presses into store
//! operations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;

use super::route::Route;
use super::state::{AppState, InputMode};
use crate::domain::{NewTodo, Priority, Todo};
use crate::store::TodoStore;

/// Main TUI application
pub struct App {
    store: TodoStore,
    state: AppState,
    /// chrono format string for due dates
    date_format: String,
}

impl App {
    pub fn new(store: TodoStore, route: Route) -> Self {
        Self {
            store,
            state: AppState::new(route),
            date_format: "%Y-%m-%d".to_string(),
        }
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Give the store back, e.g. for a final save.
    pub fn into_store(self) -> TodoStore {
        self.store
    }

    /// Todo under the cursor in the current view.
    pub fn selected_todo(&self) -> Option<&Todo> {
        self.store.filtered_todos().get(self.state.selected).copied()
    }

    fn selected_id(&self) -> Option<String> {
        self.selected_todo().map(|t| t.id.clone())
    }

    fn visible_len(&self) -> usize {
        self.store.filtered_todos().len()
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return true;
        }

        match self.state.mode {
            InputMode::Normal => self.handle_normal(key),
            InputMode::Search => self.handle_search(key),
            InputMode::Add => self.handle_add(key),
        }

        let len = self.visible_len();
        self.state.clamp_selection(len);
        self.state.should_quit
    }

    fn handle_normal(&mut self, key: KeyEvent) {
        self.state.status = None;
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.state.route = self.state.route.next(),
            KeyCode::Char('1') => self.state.route = Route::Todos,
            KeyCode::Char('2') => self.state.route = Route::Stats,
            _ if self.state.route == Route::Stats => {}
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.visible_len();
                self.state.select_next(len);
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(),
            KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('a') => {
                self.state.mode = InputMode::Add;
                self.state.input.clear();
            }
            KeyCode::Char('/') => {
                self.state.mode = InputMode::Search;
                self.state.input = self.store.filter().search.clone().unwrap_or_default();
            }
            KeyCode::Char('s') => {
                let sort = self.store.sort_by().next();
                self.store.set_sort(sort);
                self.state.set_status(format!("Sorted by {}", sort));
            }
            KeyCode::Char('p') => self.cycle_priority_filter(),
            KeyCode::Char('c') => self.cycle_category_filter(),
            KeyCode::Char('f') => self.cycle_completed_filter(),
            KeyCode::Char('o') => {
                let filter = self.store.filter_mut();
                filter.overdue = !filter.overdue;
            }
            KeyCode::Esc => {
                self.store.clear_filter();
                self.state.set_status("Filters cleared");
            }
            _ => {}
        }
    }

    fn handle_search(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.state.mode = InputMode::Normal,
            KeyCode::Esc => {
                self.state.mode = InputMode::Normal;
                self.state.input.clear();
                self.store.filter_mut().search = None;
            }
            KeyCode::Backspace => {
                self.state.input.pop();
                self.apply_search();
            }
            KeyCode::Char(c) => {
                self.state.input.push(c);
                self.apply_search();
            }
            _ => {}
        }
    }

    fn apply_search(&mut self) {
        let search = (!self.state.input.is_empty()).then(|| self.state.input.clone());
        self.store.filter_mut().search = search;
        self.state.selected = 0;
    }

    fn handle_add(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let title = self.state.input.trim().to_string();
                self.state.mode = InputMode::Normal;
                self.state.input.clear();
                if title.is_empty() {
                    return;
                }
                let mut data = NewTodo::new(title);
                // New todos land in the category being viewed.
                data.category = self.store.filter().category.clone().filter(|c| !c.is_empty());
                let todo = self.store.add_todo(data);
                info!("Added todo from TUI: {}", todo.id);
                self.state.set_status(format!("Added \"{}\"", todo.title));
            }
            KeyCode::Esc => {
                self.state.mode = InputMode::Normal;
                self.state.input.clear();
            }
            KeyCode::Backspace => {
                self.state.input.pop();
            }
            KeyCode::Char(c) => self.state.input.push(c),
            _ => {}
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id()
            && let Some(todo) = self.store.toggle_todo(&id)
        {
            let verb = if todo.completed { "Completed" } else { "Reopened" };
            self.state.set_status(format!("{} \"{}\"", verb, todo.title));
        }
    }

    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id()
            && let Some(todo) = self.store.delete_todo(&id)
        {
            self.state.set_status(format!("Deleted \"{}\"", todo.title));
        }
    }

    fn cycle_priority_filter(&mut self) {
        let filter = self.store.filter_mut();
        filter.priority = match filter.priority {
            None => Some(Priority::High),
            Some(Priority::High) => Some(Priority::Medium),
            Some(Priority::Medium) => Some(Priority::Low),
            Some(Priority::Low) => None,
        };
    }

    fn cycle_category_filter(&mut self) {
        let ids: Vec<String> = self.store.categories().iter().map(|c| c.id.clone()).collect();
        let current = self.store.filter().category.clone();
        let next = match current.and_then(|cur| ids.iter().position(|id| *id == cur)) {
            None => ids.first().cloned(),
            Some(i) => ids.get(i + 1).cloned(),
        };
        self.store.filter_mut().category = next;
    }

    fn cycle_completed_filter(&mut self) {
        let filter = self.store.filter_mut();
        filter.completed = match filter.completed {
            None => Some(false),
            Some(false) => Some(true),
            Some(true) => None,
        };
    }
}
