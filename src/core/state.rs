//! # Application State
//!
//! Core business state for vimtodo. This module contains domain logic only,
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: TaskStore          // tasks (storage order) + cursor (display order)
//! ├── show_days: bool           // "in Nd" labels instead of raw deadlines
//! └── sort_by_urgency: bool     // display order = urgency projection
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::NaiveDateTime;

use crate::core::config::ResolvedConfig;
use crate::core::sort::{self, DisplayEntry};
use crate::core::store::{JsonFileStorage, TaskStore};

pub struct App {
    pub store: TaskStore,
    pub show_days: bool,
    pub sort_by_urgency: bool,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            show_days: false,
            sort_by_urgency: false,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let store = TaskStore::open(Box::new(JsonFileStorage::new(config.data_file.clone())));
        Self {
            store,
            show_days: config.show_days,
            sort_by_urgency: config.sort_by_urgency,
        }
    }

    /// Tasks in the order they are drawn at `now`.
    pub fn display_entries(&self, now: NaiveDateTime) -> Vec<DisplayEntry<'_>> {
        sort::display_order(self.store.tasks(), self.sort_by_urgency, now)
    }

    /// Storage index of the task under the cursor, if there is one.
    pub fn selected_index(&self, now: NaiveDateTime) -> Option<usize> {
        self.display_entries(now)
            .get(self.store.cursor())
            .map(|entry| entry.index)
    }
}
