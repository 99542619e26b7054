//! The todo store and its persisted encoding.
//!
//! # Example
//!
//! ```
//! use todos::clock::SystemClock;
//! use todos::domain::{NewTodo, Priority, TodoSort};
//! use todos::storage::MemoryStore;
//! use todos::store::TodoStore;
//!
//! let mut store = TodoStore::open(Box::new(MemoryStore::new()), Box::new(SystemClock));
//! let todo = store.add_todo(NewTodo::new("Water the plants").priority(Priority::High));
//! store.toggle_todo(&todo.id);
//!
//! store.set_sort(TodoSort::Priority);
//! assert_eq!(store.filtered_todos().len(), 1);
//! assert_eq!(store.stats().completion_rate, 100);
//! ```

pub mod codec;
mod todo_store;

pub use codec::{CATEGORIES_KEY, TODOS_KEY};
pub use todo_store::TodoStore;
