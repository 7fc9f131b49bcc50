//! Task file persistence against a real filesystem.

use std::fs;

use tempfile::TempDir;
use vimtodo::core::store::{JsonFileStorage, TaskStore};
use vimtodo::core::task::Task;

fn open(dir: &TempDir, name: &str) -> TaskStore {
    TaskStore::open(Box::new(JsonFileStorage::new(dir.path().join(name))))
}

#[test]
fn test_mutations_survive_reopen() {
    let dir = TempDir::new().unwrap();

    let mut store = open(&dir, "todo.json");
    store.add("buy milk", Some("in 2 days".to_string()));
    store.add("file taxes", None);
    store.add("call mom", Some("12-25".to_string()));
    store.toggle(1);
    store.edit(2, "call mom and dad", Some("12-24".to_string()));
    store.delete(0);

    let reopened = open(&dir, "todo.json");
    assert_eq!(reopened.tasks(), store.tasks());
    assert_eq!(
        reopened.tasks(),
        [
            Task {
                text: "file taxes".to_string(),
                done: true,
                deadline: None,
            },
            Task {
                text: "call mom and dad".to_string(),
                done: false,
                deadline: Some("12-24".to_string()),
            },
        ]
    );
}

#[test]
fn test_missing_file_starts_empty_and_is_not_created() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir, "absent.json");
    assert!(store.is_empty());
    assert!(!dir.path().join("absent.json").exists());
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("todo.json"), r#"[{"text": "a", "done": fal"#).unwrap();
    assert!(open(&dir, "todo.json").is_empty());

    fs::write(
        dir.path().join("todo.json"),
        r#"[{"text": "ok", "done": false}, {"text": 5, "done": false}]"#,
    )
    .unwrap();
    assert!(open(&dir, "todo.json").is_empty());
}

#[test]
fn test_records_without_deadline_key_load_as_untimed() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("todo.json"),
        r#"[{"text": "old", "done": true}, {"text": "blank", "done": false, "deadline": ""}]"#,
    )
    .unwrap();

    let store = open(&dir, "todo.json");
    assert_eq!(store.len(), 2);
    assert!(store.tasks().iter().all(|t| t.deadline.is_none()));
    assert!(store.tasks()[0].done);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("todo.json");
    let storage = JsonFileStorage::new(&path);
    assert_eq!(storage.path(), path.as_path());

    let mut store = TaskStore::open(Box::new(storage));
    store.add("first", None);

    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn test_file_is_a_json_array_in_storage_order() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir, "todo.json");
    store.add("one", None);
    store.add("two", Some("2024-07-01".to_string()));

    let raw = fs::read_to_string(dir.path().join("todo.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"text": "one", "done": false, "deadline": null},
            {"text": "two", "done": false, "deadline": "2024-07-01"},
        ])
    );
}

#[test]
fn test_explicit_save_of_empty_list_writes_empty_array() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir, "todo.json");
    store.save().unwrap();
    let raw = fs::read_to_string(dir.path().join("todo.json")).unwrap();
    assert_eq!(raw.trim(), "[]");
}
