//! # Task Store
//!
//! Owns the list of tasks and the cursor, and writes the whole list back to
//! storage after every mutation.
//!
//! Bad indices are not errors here. `toggle`, `delete` and `edit` with an
//! out-of-range index simply do nothing; the controller relies on that.
//!
//! The persisted format is a JSON array in storage order:
//!
//! ```json
//! [{"text": "buy milk", "done": false, "deadline": "in 2 days"}]
//! ```
//!
//! A missing or undecodable file loads as an empty list. Decoding is
//! all-or-nothing, a single malformed record discards the whole file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::core::task::Task;

// ============================================================================
// Storage collaborator
// ============================================================================

/// Raw read/write access to wherever the task file lives.
pub trait TaskStorage {
    /// Read the full contents. A missing file is an `io::ErrorKind::NotFound` error.
    fn read(&self) -> io::Result<String>;
    /// Replace the full contents.
    fn write(&self, contents: &str) -> io::Result<()>;
    /// Human-readable location for log lines.
    fn location(&self) -> String;
}

/// The task file on local disk.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStorage for JsonFileStorage {
    fn read(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }

    /// Writes a `.tmp` sibling then renames it over the real file.
    fn write(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Decode(serde_json::Error),
    Encode(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "task file I/O error: {e}"),
            StorageError::Decode(e) => write!(f, "task file is not a valid task list: {e}"),
            StorageError::Encode(e) => write!(f, "could not encode tasks: {e}"),
        }
    }
}

impl std::error::Error for StorageError {}

// ============================================================================
// Codec
// ============================================================================

pub fn decode_tasks(json: &str) -> Result<Vec<Task>, StorageError> {
    let tasks: Vec<Task> = serde_json::from_str(json).map_err(StorageError::Decode)?;
    Ok(tasks.into_iter().map(Task::normalized).collect())
}

pub fn encode_tasks(tasks: &[Task]) -> Result<String, StorageError> {
    serde_json::to_string_pretty(tasks).map_err(StorageError::Encode)
}

// ============================================================================
// Store
// ============================================================================

pub struct TaskStore {
    tasks: Vec<Task>,
    /// Position in the *display* order, not the storage order.
    cursor: usize,
    storage: Box<dyn TaskStorage>,
}

impl TaskStore {
    /// Open the store, loading whatever the storage holds. Never fails:
    /// unreadable or corrupt contents start an empty list.
    pub fn open(storage: Box<dyn TaskStorage>) -> Self {
        let tasks = match Self::load(storage.as_ref()) {
            Ok(tasks) => {
                info!("Loaded {} tasks from {}", tasks.len(), storage.location());
                tasks
            }
            Err(StorageError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!("No task file at {}, starting empty", storage.location());
                Vec::new()
            }
            Err(e) => {
                warn!("Ignoring task file {}: {}", storage.location(), e);
                Vec::new()
            }
        };

        Self {
            tasks,
            cursor: 0,
            storage,
        }
    }

    fn load(storage: &dyn TaskStorage) -> Result<Vec<Task>, StorageError> {
        let json = storage.read().map_err(StorageError::Io)?;
        decode_tasks(&json)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn location(&self) -> String {
        self.storage.location()
    }

    /// Append a new pending task.
    pub fn add(&mut self, text: impl Into<String>, deadline: Option<String>) {
        self.tasks.push(Task::new(text, deadline));
        self.persist();
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(task) = self.tasks.get_mut(index) {
            task.done = !task.done;
            self.persist();
        }
    }

    pub fn delete(&mut self, index: usize) {
        if index < self.tasks.len() {
            self.tasks.remove(index);
            self.clamp_cursor();
            self.persist();
        }
    }

    /// Overwrite text and deadline in place. `done` is left alone.
    pub fn edit(&mut self, index: usize, text: impl Into<String>, deadline: Option<String>) {
        if let Some(task) = self.tasks.get_mut(index) {
            let edited = Task::new(text, deadline);
            task.text = edited.text;
            task.deadline = edited.deadline;
            self.persist();
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.tasks.len() {
            self.cursor += 1;
        }
    }

    /// Write every task, in storage order, replacing the previous contents.
    pub fn save(&self) -> Result<(), StorageError> {
        let json = encode_tasks(&self.tasks)?;
        self.storage.write(&json).map_err(StorageError::Io)?;
        debug!("Saved {} tasks to {}", self.tasks.len(), self.storage.location());
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!("Failed to save tasks: {}", e);
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.tasks.len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStorage;

    fn store_with(texts: &[&str]) -> (TaskStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let mut store = TaskStore::open(Box::new(storage.clone()));
        for text in texts {
            store.add(*text, None);
        }
        (store, storage)
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let store = TaskStore::open(Box::new(MemoryStorage::new()));
        assert!(store.is_empty());
        assert_eq!(store.cursor(), 0);
    }

    #[test]
    fn test_open_corrupt_file_is_empty() {
        let storage = MemoryStorage::with_contents(r#"[{"text": "ok", "done": false}, {"text": 5}"#);
        let store = TaskStore::open(Box::new(storage));
        assert!(store.is_empty());
    }

    #[test]
    fn test_one_bad_record_discards_everything() {
        let storage = MemoryStorage::with_contents(
            r#"[{"text": "ok", "done": false}, {"text": "missing done"}]"#,
        );
        assert!(TaskStore::open(Box::new(storage)).is_empty());
    }

    #[test]
    fn test_add_appends_pending_and_persists() {
        let (mut store, storage) = store_with(&["a"]);
        store.add("b", Some("in 2 days".to_string()));
        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[1].text, "b");
        assert!(!store.tasks()[1].done);
        assert!(storage.contents().unwrap().contains("in 2 days"));
    }

    #[test]
    fn test_toggle_flips_and_ignores_bad_index() {
        let (mut store, _) = store_with(&["a"]);
        store.toggle(0);
        assert!(store.tasks()[0].done);
        store.toggle(0);
        assert!(!store.tasks()[0].done);
        store.toggle(7);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_last_with_cursor_at_end_moves_cursor_back() {
        let (mut store, _) = store_with(&["a", "b", "c"]);
        store.move_cursor_down();
        store.move_cursor_down();
        assert_eq!(store.cursor(), 2);
        store.delete(2);
        assert_eq!(store.cursor(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_only_task_floors_cursor_at_zero() {
        let (mut store, _) = store_with(&["a"]);
        store.delete(0);
        assert!(store.is_empty());
        assert_eq!(store.cursor(), 0);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let (mut store, storage) = store_with(&["a", "b"]);
        let before = storage.contents();
        store.delete(2);
        assert_eq!(store.len(), 2);
        assert_eq!(storage.contents(), before);
    }

    #[test]
    fn test_edit_overwrites_text_and_deadline() {
        let (mut store, _) = store_with(&["a"]);
        store.toggle(0);
        store.edit(0, "renamed", Some("12-31".to_string()));
        let task = &store.tasks()[0];
        assert_eq!(task.text, "renamed");
        assert_eq!(task.deadline.as_deref(), Some("12-31"));
        assert!(task.done);

        store.edit(0, "renamed", Some(String::new()));
        assert_eq!(store.tasks()[0].deadline, None);
        store.edit(3, "ghost", None);
        assert_eq!(store.tasks()[0].text, "renamed");
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let (mut store, _) = store_with(&["a", "b"]);
        store.move_cursor_up();
        assert_eq!(store.cursor(), 0);
        store.move_cursor_down();
        store.move_cursor_down();
        store.move_cursor_down();
        assert_eq!(store.cursor(), 1);
    }

    #[test]
    fn test_cursor_stays_put_on_empty_list() {
        let (mut store, _) = store_with(&[]);
        store.move_cursor_down();
        store.move_cursor_up();
        assert_eq!(store.cursor(), 0);
    }

    #[test]
    fn test_save_then_reopen_round_trips() {
        let (mut store, storage) = store_with(&["a", "b", "c"]);
        store.toggle(1);
        store.edit(2, "c2", Some("2030-01-01".to_string()));
        store.delete(0);
        store.add("d", None);

        let reopened = TaskStore::open(Box::new(storage.clone()));
        assert_eq!(reopened.tasks(), store.tasks());
    }

    #[test]
    fn test_save_failure_does_not_lose_in_memory_state() {
        let storage = MemoryStorage::new();
        let mut store = TaskStore::open(Box::new(storage.clone()));
        storage.fail_writes(true);
        store.add("kept", None);
        assert_eq!(store.len(), 1);
        assert!(store.save().is_err());
    }

    #[test]
    fn test_decode_normalizes_empty_deadline() {
        let tasks = decode_tasks(r#"[{"text": "x", "done": false, "deadline": ""}]"#).unwrap();
        assert_eq!(tasks[0].deadline, None);
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(matches!(decode_tasks("{}"), Err(StorageError::Decode(_))));
    }

    #[test]
    fn test_completed_count() {
        let (mut store, _) = store_with(&["a", "b", "c"]);
        store.toggle(0);
        store.toggle(2);
        assert_eq!(store.completed(), 2);
    }
}
