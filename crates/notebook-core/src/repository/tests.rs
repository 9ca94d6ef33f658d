//! Repository Integration Tests
//!
//! Tests for LocalTaskRepository over an in-memory key-value store.

use pretty_assertions::assert_eq;

use crate::config::keys;
use crate::domain::{DomainError, Task};
use crate::repository::{KeyValueStore, LocalTaskRepository, MemoryStore, Repository};

fn setup_repo(store: &MemoryStore) -> LocalTaskRepository<&MemoryStore> {
    LocalTaskRepository::new(store)
}

#[test]
fn test_list_absent_is_empty() {
    let store = MemoryStore::new();
    let repo = setup_repo(&store);
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn test_list_malformed_is_empty() {
    let store = MemoryStore::new().with_entry(keys::TODOS, "{not json");
    let repo = setup_repo(&store);
    assert!(repo.list().unwrap().is_empty());

    let store = MemoryStore::new().with_entry(keys::TODOS, r#"{"id":1}"#);
    assert!(setup_repo(&store).list().unwrap().is_empty());
}

#[test]
fn test_list_is_idempotent() {
    let store = MemoryStore::new();
    let repo = setup_repo(&store);
    repo.create(&Task::new_local("Buy groceries", "", 1)).unwrap();
    repo.create(&Task::new_local("Walk the dog", "", 2)).unwrap();

    assert_eq!(repo.list().unwrap(), repo.list().unwrap());
}

#[test]
fn test_create_appends() {
    let store = MemoryStore::new();
    let repo = setup_repo(&store);
    repo.create(&Task::new_local("First task here", "", 1)).unwrap();
    repo.create(&Task::new_local("Second task here", "", 2)).unwrap();

    let ids: Vec<i64> = repo.list().unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_find_by_id() {
    let store = MemoryStore::new();
    let repo = setup_repo(&store);
    repo.create(&Task::new_local("Find me please", "", 10)).unwrap();

    let found = repo.find_by_id(10).unwrap();
    assert_eq!(found.map(|t| t.title), Some("Find me please".to_string()));
    assert!(repo.find_by_id(11).unwrap().is_none());
}

#[test]
fn test_update_replaces_record() {
    let store = MemoryStore::new();
    let repo = setup_repo(&store);
    let mut task = repo.create(&Task::new_local("Original title", "", 1)).unwrap();

    task.title = "Updated title".to_string();
    task.done = true;
    repo.update(&task).unwrap();

    let found = repo.find_by_id(1).unwrap().unwrap();
    assert_eq!(found, task);
}

#[test]
fn test_update_missing_is_not_found() {
    let store = MemoryStore::new();
    let repo = setup_repo(&store);
    let result = repo.update(&Task::new_local("Nobody stored me", "", 99));
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[test]
fn test_delete_filters_record() {
    let store = MemoryStore::new();
    let repo = setup_repo(&store);
    repo.create(&Task::new_local("Keep this one", "", 1)).unwrap();
    repo.create(&Task::new_local("Delete this one", "", 2)).unwrap();

    repo.delete(2).unwrap();
    let ids: Vec<i64> = repo.list().unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1]);

    // absent id is a no-op
    repo.delete(2).unwrap();
    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn test_writes_json_array() {
    let store = MemoryStore::new();
    let repo = setup_repo(&store);
    repo.create(&Task::new_local("Stored as JSON", "", 7)).unwrap();

    let raw = store.get(keys::TODOS).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.is_array());
    assert_eq!(value[0]["title"], "Stored as JSON");
}

#[test]
fn test_bad_record_reads_empty_and_next_write_replaces() {
    let raw = r#"[{"id":1,"title":"Kept before","createdAt":1},{"id":2,"title":null,"createdAt":2}]"#;
    let store = MemoryStore::new().with_entry(keys::TODOS, raw);
    let repo = setup_repo(&store);
    assert!(repo.list().unwrap().is_empty());

    repo.create(&Task::new_local("Written after", "", 3)).unwrap();
    let titles: Vec<String> = repo.list().unwrap().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Written after".to_string()]);
}
