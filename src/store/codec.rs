//! JSON encoding of the persisted collections.
//!
//! Both collections are stored as JSON arrays of plain records. Dates are
//! ISO-8601 strings; decoding accepts the millisecond form
//! (`2025-01-01T09:30:00.000Z`) as well as chrono's own output.

use crate::domain::{Category, Todo};
use crate::error::Result;

/// Storage key holding the todo collection.
pub const TODOS_KEY: &str = "creative-todo-app";

/// Storage key holding the category collection.
pub const CATEGORIES_KEY: &str = "creative-todo-categories";

pub fn encode_todos(todos: &[Todo]) -> Result<String> {
    Ok(serde_json::to_string(todos)?)
}

pub fn decode_todos(raw: &str) -> Result<Vec<Todo>> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode_categories(categories: &[Category]) -> Result<String> {
    Ok(serde_json::to_string(categories)?)
}

pub fn decode_categories(raw: &str) -> Result<Vec<Category>> {
    Ok(serde_json::from_str(raw)?)
}
