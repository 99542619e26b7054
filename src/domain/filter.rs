//! Filter and sort selection, and the derived todo view.
//!
//! [`apply`] is a pure function of the collection, the selection, and the
//! current time; callers recompute it whenever they need the view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::todo::{Priority, Todo};
use crate::error::TodoError;

/// Selection criteria. Every set criterion must hold (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoFilter {
    /// Category id; an empty string counts as unset
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
    /// Free-text search; an empty string counts as unset
    pub search: Option<String>,
    pub overdue: bool,
}

impl TodoFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn overdue(mut self, overdue: bool) -> Self {
        self.overdue = overdue;
        self
    }

    /// True when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.active_category().is_none()
            && self.priority.is_none()
            && self.completed.is_none()
            && self.active_search().is_none()
            && !self.overdue
    }

    fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    fn active_search(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// Check if a todo passes every active criterion.
    pub fn matches(&self, todo: &Todo, now: DateTime<Utc>) -> bool {
        self.matches_with_needle(todo, self.active_search().map(str::to_lowercase).as_deref(), now)
    }

    fn matches_with_needle(&self, todo: &Todo, needle: Option<&str>, now: DateTime<Utc>) -> bool {
        if let Some(category) = self.active_category()
            && todo.category.as_deref() != Some(category)
        {
            return false;
        }
        if let Some(priority) = self.priority
            && todo.priority != priority
        {
            return false;
        }
        if let Some(completed) = self.completed
            && todo.completed != completed
        {
            return false;
        }
        if let Some(needle) = needle
            && !todo.matches_search(needle)
        {
            return false;
        }
        !self.overdue || todo.is_overdue(now)
    }
}

/// Active sort mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TodoSort {
    /// Newest first
    #[default]
    CreatedAt,
    /// Soonest first, undated last
    DueDate,
    /// High to low
    Priority,
    /// Alphabetical
    Title,
}

impl TodoSort {
    pub const ALL: [TodoSort; 4] = [TodoSort::CreatedAt, TodoSort::DueDate, TodoSort::Priority, TodoSort::Title];

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoSort::CreatedAt => "createdAt",
            TodoSort::DueDate => "dueDate",
            TodoSort::Priority => "priority",
            TodoSort::Title => "title",
        }
    }

    /// Cycle to the next mode.
    pub fn next(self) -> Self {
        match self {
            TodoSort::CreatedAt => TodoSort::DueDate,
            TodoSort::DueDate => TodoSort::Priority,
            TodoSort::Priority => TodoSort::Title,
            TodoSort::Title => TodoSort::CreatedAt,
        }
    }

    /// Ordering between two todos under this mode.
    pub fn compare(&self, a: &Todo, b: &Todo) -> Ordering {
        match self {
            TodoSort::Priority => b.priority.rank().cmp(&a.priority.rank()),
            TodoSort::DueDate => match (a.due_date, b.due_date) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(&b),
            },
            TodoSort::Title => compare_titles(&a.title, &b.title),
            TodoSort::CreatedAt => b.created_at.cmp(&a.created_at),
        }
    }
}

impl fmt::Display for TodoSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TodoSort {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "createdat" | "created" | "newest" => Ok(TodoSort::CreatedAt),
            "duedate" | "due" => Ok(TodoSort::DueDate),
            "priority" => Ok(TodoSort::Priority),
            "title" => Ok(TodoSort::Title),
            _ => Err(TodoError::InvalidInput(format!("unknown sort mode: {}", s))),
        }
    }
}

/// Locale-style title comparison.
///
/// Three levels, the way a root-locale collation orders Latin text: base
/// letters with accents and case folded away, then accents, then case with
/// lowercase first. "apple" < "Éclair" < "eclairs" < "Zebra".
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Filter then stable-sort the collection into the view.
pub fn apply<'a>(todos: &'a [Todo], filter: &TodoFilter, sort: TodoSort, now: DateTime<Utc>) -> Vec<&'a Todo> {
    let needle = filter.active_search().map(str::to_lowercase);
    let mut view: Vec<&Todo> = todos
        .iter()
        .filter(|todo| filter.matches_with_needle(todo, needle.as_deref(), now))
        .collect();
    view.sort_by(|a, b| sort.compare(a, b));
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::todo::NewTodo;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn todo(id: &str, data: NewTodo, age_minutes: i64) -> Todo {
        Todo::from_new(id.to_string(), data, now() - Duration::minutes(age_minutes))
    }

    fn ids(view: &[&Todo]) -> Vec<String> {
        view.iter().map(|t| t.id.clone()).collect()
    }

    fn fixture() -> Vec<Todo> {
        vec![
            todo("a", NewTodo::new("Pay rent").priority(Priority::High).category("1"), 30),
            todo(
                "b",
                NewTodo::new("Standup notes")
                    .description("Summarize the sprint")
                    .priority(Priority::Low)
                    .category("2")
                    .due(now() - Duration::days(1)),
                20,
            ),
            todo(
                "c",
                NewTodo::new("groceries")
                    .category("3")
                    .due(now() + Duration::days(2))
                    .completed(true),
                10,
            ),
            todo("d", NewTodo::new("Dentist").category("4").due(now() + Duration::hours(3)), 5),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything_newest_first() {
        let todos = fixture();
        let view = apply(&todos, &TodoFilter::new(), TodoSort::CreatedAt, now());
        assert_eq!(ids(&view), vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn test_filter_by_category() {
        let todos = fixture();
        let view = apply(&todos, &TodoFilter::new().category("2"), TodoSort::default(), now());
        assert_eq!(ids(&view), vec!["b"]);
    }

    #[test]
    fn test_empty_category_is_ignored() {
        let todos = fixture();
        let filter = TodoFilter::new().category("");
        assert!(filter.is_empty());
        assert_eq!(apply(&todos, &filter, TodoSort::default(), now()).len(), 4);
    }

    #[test]
    fn test_filter_by_priority() {
        let todos = fixture();
        let view = apply(&todos, &TodoFilter::new().priority(Priority::Medium), TodoSort::Title, now());
        assert_eq!(ids(&view), vec!["d", "c"]);
    }

    #[test]
    fn test_filter_by_completed() {
        let todos = fixture();
        let done = apply(&todos, &TodoFilter::new().completed(true), TodoSort::default(), now());
        assert_eq!(ids(&done), vec!["c"]);

        let pending = apply(&todos, &TodoFilter::new().completed(false), TodoSort::default(), now());
        assert_eq!(pending.len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let todos = fixture();
        let by_title = apply(&todos, &TodoFilter::new().search("RENT"), TodoSort::default(), now());
        assert_eq!(ids(&by_title), vec!["a"]);

        let by_description = apply(&todos, &TodoFilter::new().search("sprint"), TodoSort::default(), now());
        assert_eq!(ids(&by_description), vec!["b"]);
    }

    #[test]
    fn test_overdue_filter() {
        let todos = fixture();
        let view = apply(&todos, &TodoFilter::new().overdue(true), TodoSort::default(), now());
        assert_eq!(ids(&view), vec!["b"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let todos = fixture();
        let filter = TodoFilter::new().category("2").priority(Priority::High);
        assert!(apply(&todos, &filter, TodoSort::default(), now()).is_empty());

        let filter = TodoFilter::new().completed(false).search("d");
        let view = apply(&todos, &filter, TodoSort::Title, now());
        assert_eq!(ids(&view), vec!["d", "b"]);
    }

    #[test]
    fn test_sort_priority_descending() {
        let todos = vec![
            todo("low", NewTodo::new("x").priority(Priority::Low), 3),
            todo("high", NewTodo::new("y").priority(Priority::High), 2),
            todo("medium", NewTodo::new("z").priority(Priority::Medium), 1),
        ];
        let view = apply(&todos, &TodoFilter::new(), TodoSort::Priority, now());
        assert_eq!(ids(&view), vec!["high", "medium", "low"]);
    }

    #[test]
    fn test_sort_priority_is_stable() {
        let todos = vec![
            todo("first", NewTodo::new("x").priority(Priority::High), 3),
            todo("second", NewTodo::new("y").priority(Priority::High), 2),
        ];
        let view = apply(&todos, &TodoFilter::new(), TodoSort::Priority, now());
        assert_eq!(ids(&view), vec!["first", "second"]);
    }

    #[test]
    fn test_sort_due_date_undated_last() {
        let todos = fixture();
        let view = apply(&todos, &TodoFilter::new(), TodoSort::DueDate, now());
        assert_eq!(ids(&view), vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_sort_title_case_insensitive() {
        let todos = fixture();
        let view = apply(&todos, &TodoFilter::new(), TodoSort::Title, now());
        assert_eq!(ids(&view), vec!["d", "c", "a", "b"]);
    }

    #[test]
    fn test_compare_titles_lowercase_first_on_tie() {
        assert_eq!(compare_titles("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_titles("Banana", "apple"), Ordering::Greater);
        assert_eq!(compare_titles("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_compare_titles_folds_accents() {
        let mut titles = vec!["Zebra", "Éclair", "apple"];
        titles.sort_by(|a, b| compare_titles(a, b));
        assert_eq!(titles, vec!["apple", "Éclair", "Zebra"]);

        // Accents only break ties between otherwise equal letters
        assert_eq!(compare_titles("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_titles("résumé", "resumes"), Ordering::Less);
        assert_eq!(compare_titles("éclair", "Éclair"), Ordering::Less);
    }

    #[test]
    fn test_sort_title_with_accents() {
        let todos = vec![
            todo("z", NewTodo::new("Zucchini"), 1),
            todo("e", NewTodo::new("Épicerie"), 2),
            todo("a", NewTodo::new("ananas"), 3),
        ];
        let view = apply(&todos, &TodoFilter::new(), TodoSort::Title, now());
        assert_eq!(ids(&view), vec!["a", "e", "z"]);
    }

    #[test]
    fn test_sort_from_str() {
        assert_eq!("createdAt".parse::<TodoSort>().unwrap(), TodoSort::CreatedAt);
        assert_eq!("due-date".parse::<TodoSort>().unwrap(), TodoSort::DueDate);
        assert_eq!("due_date".parse::<TodoSort>().unwrap(), TodoSort::DueDate);
        assert_eq!("Priority".parse::<TodoSort>().unwrap(), TodoSort::Priority);
        assert!("random".parse::<TodoSort>().is_err());
    }

    #[test]
    fn test_sort_next_cycles_through_all() {
        let mut sort = TodoSort::default();
        for expected in TodoSort::ALL.iter().skip(1) {
            sort = sort.next();
            assert_eq!(sort, *expected);
        }
        assert_eq!(sort.next(), TodoSort::CreatedAt);
    }

    #[test]
    fn test_sort_serializes_camel_case() {
        assert_eq!(serde_json::to_string(&TodoSort::DueDate).unwrap(), "\"dueDate\"");
    }
}
