//! Storage trait definitions.

use crate::error::{Result, TodoError};

/// A string-keyed, string-valued persistent store.
///
/// Mirrors the shape of browser local storage: whole values are read and
/// written at once, and a missing key reads as `None`.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Reject keys that cannot be used as a plain file name.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(TodoError::InvalidInput(format!("invalid storage key: {:?}", key)))
    }
}
