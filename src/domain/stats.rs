//! Aggregate statistics over the todo collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::todo::Todo;

/// Derived counts; never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    /// Integer percentage, 0 when there are no todos
    pub completion_rate: u32,
}

impl TodoStats {
    pub fn compute(todos: &[Todo], now: DateTime<Utc>) -> Self {
        let total = todos.len();
        let completed = todos.iter().filter(|t| t.completed).count();
        let overdue = todos.iter().filter(|t| t.is_overdue(now)).count();
        let completion_rate = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total,
            completed,
            pending: total - completed,
            overdue,
            completion_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::todo::NewTodo;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-15T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn todo(data: NewTodo) -> Todo {
        Todo::from_new(crate::id::generate_id(), data, now() - Duration::days(7))
    }

    #[test]
    fn test_empty_collection() {
        let stats = TodoStats::compute(&[], now());
        assert_eq!(
            stats,
            TodoStats {
                total: 0,
                completed: 0,
                pending: 0,
                overdue: 0,
                completion_rate: 0,
            }
        );
    }

    #[test]
    fn test_counts() {
        let todos = vec![
            todo(NewTodo::new("a").completed(true)),
            todo(NewTodo::new("b").due(now() - Duration::hours(1))),
            todo(NewTodo::new("c").due(now() - Duration::hours(1)).completed(true)),
            todo(NewTodo::new("d").due(now() + Duration::hours(1))),
        ];
        let stats = TodoStats::compute(&todos, now());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.completion_rate, 50);
    }

    #[test]
    fn test_completion_rate_rounds() {
        let todos = vec![
            todo(NewTodo::new("a").completed(true)),
            todo(NewTodo::new("b")),
            todo(NewTodo::new("c")),
        ];
        // 33.33 -> 33
        assert_eq!(TodoStats::compute(&todos, now()).completion_rate, 33);

        let todos = vec![
            todo(NewTodo::new("a").completed(true)),
            todo(NewTodo::new("b").completed(true)),
            todo(NewTodo::new("c")),
        ];
        // 66.67 -> 67
        assert_eq!(TodoStats::compute(&todos, now()).completion_rate, 67);
    }

    #[test]
    fn test_completed_overdue_is_not_counted() {
        let mut item = todo(NewTodo::new("late").due(now() - Duration::days(1)));
        assert_eq!(TodoStats::compute(std::slice::from_ref(&item), now()).overdue, 1);

        item.completed = true;
        assert_eq!(TodoStats::compute(std::slice::from_ref(&item), now()).overdue, 0);
    }
}
