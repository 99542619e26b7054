//! Store persistence integration tests
//!
//! Drives a `TodoStore` over the on-disk backends and reopens it to check
//! that both collections survive.

use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;
use todos::clock::{Clock, FixedClock, ManualClock};
use todos::config::{StorageBackend, StorageConfig};
use todos::domain::{NewCategory, NewTodo, Priority, TodoFilter, TodoPatch, TodoSort};
use todos::error::Result;
use todos::storage::{self, FileStore, KeyValueStore, SqliteStore};
use todos::store::{CATEGORIES_KEY, TODOS_KEY, TodoStore};

fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap())
}

fn populate(store: &mut TodoStore) -> (String, String) {
    let garden = store.add_category(NewCategory::new("Garden", "success").icon("🌱"));
    let first = store.add_todo(
        NewTodo::new("Plant tomatoes")
            .priority(Priority::High)
            .category(garden.id.clone())
            .due(Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap()),
    );
    store.add_todo(NewTodo::new("Call plumber").description("kitchen sink"));
    (first.id, garden.id)
}

/// Integration test: file backend survives a reopen
#[test]
fn test_file_backend_reopen() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let (todo_id, category_id) = {
        let mut store = TodoStore::open(Box::new(FileStore::new(temp_dir.path())?), Box::new(clock()));
        populate(&mut store)
    };

    let store = TodoStore::open(Box::new(FileStore::new(temp_dir.path())?), Box::new(clock()));
    assert_eq!(store.all_todos().len(), 2);
    assert_eq!(store.categories().len(), 5);

    let todo = store.todo(&todo_id).unwrap();
    assert_eq!(todo.title, "Plant tomatoes");
    assert_eq!(todo.category.as_deref(), Some(category_id.as_str()));
    assert_eq!(store.category(&category_id).unwrap().name, "Garden");

    // Insertion order survives
    assert_eq!(store.all_todos()[1].title, "Call plumber");
    Ok(())
}

/// Integration test: SQLite backend survives a reopen
#[test]
fn test_sqlite_backend_reopen() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let db = temp_dir.path().join("todos.db");

    let todo_id = {
        let mut store = TodoStore::open(Box::new(SqliteStore::open(&db)?), Box::new(clock()));
        let (todo_id, _) = populate(&mut store);
        store.toggle_todo(&todo_id);
        todo_id
    };

    let store = TodoStore::open(Box::new(SqliteStore::open(&db)?), Box::new(clock()));
    assert!(store.todo(&todo_id).unwrap().completed);
    assert_eq!(store.stats().completed, 1);
    Ok(())
}

/// Integration test: configured backend writes both entries on every mutation
#[test]
fn test_configured_backend_writes_both_entries() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = StorageConfig {
        backend: StorageBackend::File,
        dir: temp_dir.path().to_path_buf(),
    };

    let mut store = TodoStore::open(storage::open(&config)?, Box::new(clock()));
    store.add_todo(NewTodo::new("Only one"));

    assert!(store.storage().get_item(TODOS_KEY)?.is_some());
    assert!(store.storage().get_item(CATEGORIES_KEY)?.is_some());
    assert!(temp_dir.path().join("store").join(format!("{}.json", TODOS_KEY)).exists());
    Ok(())
}

/// Integration test: deleting a category detaches it and the detach persists
#[test]
fn test_category_detach_persists() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let clock = clock();

    let (todo_id, category_id, other_id) = {
        let mut store = TodoStore::open(Box::new(FileStore::new(temp_dir.path())?), Box::new(clock.clone()));
        let (todo_id, category_id) = populate(&mut store);
        let other = store.add_todo(NewTodo::new("Weekly review").category("2"));

        clock.advance(Duration::minutes(5));
        assert!(store.delete_category(&category_id).is_some());
        (todo_id, category_id, other.id)
    };

    let store = TodoStore::open(Box::new(FileStore::new(temp_dir.path())?), Box::new(clock.clone()));
    assert!(store.category(&category_id).is_none());

    let detached = store.todo(&todo_id).unwrap();
    assert!(detached.category.is_none());
    assert_eq!(detached.updated_at, clock.now());
    assert_eq!(store.todo(&other_id).unwrap().category.as_deref(), Some("2"));
    Ok(())
}

/// Integration test: a corrupt todos entry does not block categories
#[test]
fn test_corrupt_todos_entry_keeps_categories() -> Result<()> {
    let temp_dir = TempDir::new()?;
    {
        let mut backend = FileStore::new(temp_dir.path())?;
        backend.set_item(TODOS_KEY, "{not json")?;
        backend.set_item(
            CATEGORIES_KEY,
            r#"[{"id":"9","name":"Errands","color":"info"}]"#,
        )?;
    }

    let store = TodoStore::open(Box::new(FileStore::new(temp_dir.path())?), Box::new(clock()));
    assert!(store.all_todos().is_empty());
    assert_eq!(store.categories().len(), 1);
    assert_eq!(store.categories()[0].name, "Errands");
    Ok(())
}

/// Integration test: filtered view and stats over a persisted collection
#[test]
fn test_views_after_reopen() -> Result<()> {
    let temp_dir = TempDir::new()?;
    {
        let mut store = TodoStore::open(Box::new(FileStore::new(temp_dir.path())?), Box::new(FixedClock::new(clock().now())));
        store.add_todo(NewTodo::new("low one").priority(Priority::Low));
        store.add_todo(NewTodo::new("high one").priority(Priority::High));
        let medium = store.add_todo(NewTodo::new("medium one"));
        store.update_todo(&medium.id, TodoPatch::new().completed(true));
    }

    let mut store = TodoStore::open(Box::new(FileStore::new(temp_dir.path())?), Box::new(FixedClock::new(clock().now())));
    store.set_sort(TodoSort::Priority);
    let titles: Vec<&str> = store.filtered_todos().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["high one", "medium one", "low one"]);

    store.set_filter(TodoFilter::new().completed(false).search("ONE"));
    assert_eq!(store.filtered_todos().len(), 2);

    let stats = store.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.completion_rate, 33);
    Ok(())
}
