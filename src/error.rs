//! Error types for todos
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in the todos library
#[derive(Debug, Error)]
pub enum TodoError {
    /// Todo not found in the store
    #[error("Todo not found: {0}")]
    TodoNotFound(String),

    /// Category not found in the store
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Malformed user input (priority, sort mode, date, storage key)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No view is registered under this path
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// Key-value backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// SQLite backend error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type alias for todos operations
pub type Result<T> = std::result::Result<T, TodoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_not_found_error() {
        let err = TodoError::TodoNotFound("1738300800123-a1b2c3d4".to_string());
        assert_eq!(err.to_string(), "Todo not found: 1738300800123-a1b2c3d4");
    }

    #[test]
    fn test_category_not_found_error() {
        let err = TodoError::CategoryNotFound("9".to_string());
        assert_eq!(err.to_string(), "Category not found: 9");
    }

    #[test]
    fn test_invalid_input_error() {
        let err = TodoError::InvalidInput("unknown priority: urgent".to_string());
        assert_eq!(err.to_string(), "Invalid input: unknown priority: urgent");
    }

    #[test]
    fn test_route_not_found_error() {
        let err = TodoError::RouteNotFound("/settings".to_string());
        assert_eq!(err.to_string(), "Route not found: /settings");
    }

    #[test]
    fn test_storage_error() {
        let err = TodoError::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TodoError = io_err.into();
        assert!(matches!(err, TodoError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: TodoError = json_err.into();
        assert!(matches!(err, TodoError::Json(_)));
    }

    #[test]
    fn test_sqlite_error_conversion() {
        let err: TodoError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, TodoError::Sqlite(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(TodoError::Storage("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }
}
