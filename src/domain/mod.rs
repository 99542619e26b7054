//! Domain types for todos
//!
//! This module contains the core domain types:
//! - Todo: a task record, plus `NewTodo` and `TodoPatch` for create/update
//! - Category: a label for todos, with the built-in seed set
//! - TodoFilter / TodoSort: the view selection and the pure `apply` pass
//! - TodoStats: aggregate counts derived from the collection

pub mod category;
pub mod filter;
pub mod stats;
pub mod todo;

pub use category::{Category, NewCategory, default_categories};
pub use filter::{TodoFilter, TodoSort, compare_titles};
pub use stats::TodoStats;
pub use todo::{NewTodo, Priority, Todo, TodoPatch};
