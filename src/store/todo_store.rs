//! TodoStore: the owner of the todo and category collections.
//!
//! Every mutating operation ends with an explicit [`TodoStore::save`] that
//! writes both collections to the key-value backend. Persistence failures are
//! logged and swallowed: the in-memory collections stay authoritative for the
//! rest of the session.
//!
//! Derived state (`filtered_todos`, `stats`) is recomputed on every call.

use chrono::{DateTime, Utc};
use log::{debug, error, info};

use crate::clock::Clock;
use crate::domain::{
    Category, NewCategory, NewTodo, Todo, TodoFilter, TodoPatch, TodoSort, TodoStats, default_categories, filter,
};
use crate::error::Result;
use crate::id::generate_unique_id;
use crate::storage::KeyValueStore;
use crate::store::codec::{self, CATEGORIES_KEY, TODOS_KEY};

pub struct TodoStore {
    /// Insertion-ordered todo collection
    todos: Vec<Todo>,

    categories: Vec<Category>,

    /// Current view selection
    filter: TodoFilter,
    sort: TodoSort,

    storage: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
}

impl TodoStore {
    /// Create a store seeded with the default categories and hydrate it from
    /// `storage`.
    pub fn open(storage: Box<dyn KeyValueStore>, clock: Box<dyn Clock>) -> Self {
        let mut store = Self {
            todos: Vec::new(),
            categories: default_categories(),
            filter: TodoFilter::default(),
            sort: TodoSort::default(),
            storage,
            clock,
        };
        store.load();
        store
    }

    /// Replace the in-memory collections with whatever the backend holds.
    ///
    /// Each collection is replaced only when its entry exists and decodes;
    /// otherwise the current value is kept. Failures are logged.
    pub fn load(&mut self) {
        match self.read_entry(TODOS_KEY, codec::decode_todos) {
            Ok(Some(todos)) => {
                info!("Loaded {} todos", todos.len());
                self.todos = todos;
            }
            Ok(None) => debug!("No stored todos"),
            Err(e) => error!("Failed to load todos from storage: {}", e),
        }

        match self.read_entry(CATEGORIES_KEY, codec::decode_categories) {
            Ok(Some(categories)) => {
                info!("Loaded {} categories", categories.len());
                self.categories = categories;
            }
            Ok(None) => debug!("No stored categories, keeping defaults"),
            Err(e) => error!("Failed to load categories from storage: {}", e),
        }
    }

    fn read_entry<T>(&self, key: &str, decode: fn(&str) -> Result<T>) -> Result<Option<T>> {
        self.storage.get_item(key)?.map(|raw| decode(&raw)).transpose()
    }

    /// Write both collections to the backend, logging any failure.
    pub fn save(&mut self) {
        if let Err(e) = self.try_save() {
            error!("Failed to save todos to storage: {}", e);
        }
    }

    /// Write both collections to the backend.
    pub fn try_save(&mut self) -> Result<()> {
        let todos = codec::encode_todos(&self.todos)?;
        let categories = codec::encode_categories(&self.categories)?;
        self.storage.set_item(TODOS_KEY, &todos)?;
        self.storage.set_item(CATEGORIES_KEY, &categories)?;
        debug!("Saved {} todos and {} categories", self.todos.len(), self.categories.len());
        Ok(())
    }

    /// Current time according to the store's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // === Todos ===

    /// Create a todo, append it, and return it.
    pub fn add_todo(&mut self, data: NewTodo) -> Todo {
        let id = generate_unique_id(|candidate| self.todo(candidate).is_some());
        let todo = Todo::from_new(id, data, self.clock.now());
        info!("Added todo {}: {}", todo.id, todo.title);
        self.todos.push(todo.clone());
        self.save();
        todo
    }

    /// Merge `patch` into the todo with this id.
    ///
    /// Returns the updated record, or `None` if no todo has this id.
    pub fn update_todo(&mut self, id: &str, patch: TodoPatch) -> Option<Todo> {
        let updated = self.apply_patch(id, patch)?;
        self.save();
        Some(updated)
    }

    fn apply_patch(&mut self, id: &str, patch: TodoPatch) -> Option<Todo> {
        let now = self.clock.now();
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        patch.apply(todo, now);
        debug!("Updated todo {}", id);
        Some(todo.clone())
    }

    /// Remove the todo with this id and return it.
    pub fn delete_todo(&mut self, id: &str) -> Option<Todo> {
        let index = self.todos.iter().position(|t| t.id == id)?;
        let removed = self.todos.remove(index);
        info!("Deleted todo {}", id);
        self.save();
        Some(removed)
    }

    /// Flip the completed flag.
    pub fn toggle_todo(&mut self, id: &str) -> Option<Todo> {
        let completed = self.todo(id)?.completed;
        self.update_todo(id, TodoPatch::new().completed(!completed))
    }

    pub fn todo(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// All todos in insertion order, ignoring the filter.
    pub fn all_todos(&self) -> &[Todo] {
        &self.todos
    }

    // === Categories ===

    pub fn add_category(&mut self, data: NewCategory) -> Category {
        let id = generate_unique_id(|candidate| self.category(candidate).is_some());
        let category = data.into_category(id);
        info!("Added category {}: {}", category.id, category.name);
        self.categories.push(category.clone());
        self.save();
        category
    }

    /// Remove a category and detach it from every todo that referenced it.
    ///
    /// Detached todos get a fresh `updated_at`. Todos are never deleted.
    pub fn delete_category(&mut self, id: &str) -> Option<Category> {
        let index = self.categories.iter().position(|c| c.id == id)?;

        let referencing: Vec<String> = self
            .todos
            .iter()
            .filter(|t| t.category.as_deref() == Some(id))
            .map(|t| t.id.clone())
            .collect();
        for todo_id in &referencing {
            self.apply_patch(todo_id, TodoPatch::new().category(None));
        }

        let removed = self.categories.remove(index);
        info!("Deleted category {} (detached from {} todos)", id, referencing.len());
        self.save();
        Some(removed)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    // === View selection ===

    pub fn filter(&self) -> &TodoFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut TodoFilter {
        &mut self.filter
    }

    pub fn set_filter(&mut self, filter: TodoFilter) {
        self.filter = filter;
    }

    pub fn clear_filter(&mut self) {
        self.filter = TodoFilter::default();
    }

    pub fn sort_by(&self) -> TodoSort {
        self.sort
    }

    pub fn set_sort(&mut self, sort: TodoSort) {
        self.sort = sort;
    }

    // === Derived ===

    /// The filtered, sorted view of the collection.
    pub fn filtered_todos(&self) -> Vec<&Todo> {
        filter::apply(&self.todos, &self.filter, self.sort, self.clock.now())
    }

    pub fn stats(&self) -> TodoStats {
        TodoStats::compute(&self.todos, self.clock.now())
    }

    /// Direct access to the backend, for inspection.
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.todos.len())
            .field("categories", &self.categories.len())
            .field("filter", &self.filter)
            .field("sort", &self.sort)
            .finish_non_exhaustive()
    }
}
