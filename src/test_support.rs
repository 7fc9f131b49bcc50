//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::state::App;
use crate::core::store::{TaskStorage, TaskStore};
use crate::core::task::Task;

#[derive(Default)]
struct MemoryFile {
    contents: Option<String>,
    fail_writes: bool,
}

/// In-memory task file. Clones share the same contents, so a test can keep
/// one handle while the store owns another.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    file: Rc<RefCell<MemoryFile>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: &str) -> Self {
        let storage = Self::new();
        storage.file.borrow_mut().contents = Some(contents.to_string());
        storage
    }

    pub fn contents(&self) -> Option<String> {
        self.file.borrow().contents.clone()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.file.borrow_mut().fail_writes = fail;
    }
}

impl TaskStorage for MemoryStorage {
    fn read(&self) -> io::Result<String> {
        self.contents()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no task file"))
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        let mut file = self.file.borrow_mut();
        if file.fail_writes {
            return Err(io::Error::other("disk full"));
        }
        file.contents = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// Midday on a fixed date, so day arithmetic in tests is deterministic.
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid fixed date")
}

pub fn task(text: &str, done: bool, deadline: Option<&str>) -> Task {
    Task {
        text: text.to_string(),
        done,
        deadline: deadline.map(str::to_string),
    }
}

/// Creates a test App backed by in-memory storage holding `tasks`.
pub fn test_app(tasks: &[Task]) -> (App, MemoryStorage) {
    let storage = MemoryStorage::new();
    if !tasks.is_empty() {
        let json = serde_json::to_string(tasks).expect("tasks serialize");
        storage.file.borrow_mut().contents = Some(json);
    }
    let store = TaskStore::open(Box::new(storage.clone()));
    (App::new(store), storage)
}
