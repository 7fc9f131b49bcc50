//! # Task
//!
//! One entry of the todo list. Identity is positional: a task is "the task at
//! index N" of its owning list, so deleting or inserting shifts everything
//! after it.
//!
//! The deadline is kept exactly as the user typed it and is re-parsed on
//! every frame (see [`crate::core::deadline`]), which lets relative phrases
//! like `in 3 days` and year-less dates keep their original wording.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub text: String,
    pub done: bool,
    #[serde(default)]
    pub deadline: Option<String>,
}

impl Task {
    /// Creates a pending task. An empty deadline string means "no deadline".
    pub fn new(text: impl Into<String>, deadline: Option<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
            deadline: normalize_deadline(deadline),
        }
    }

    /// Raw deadline text, or `""` when the task is untimed.
    pub fn deadline_str(&self) -> &str {
        self.deadline.as_deref().unwrap_or("")
    }

    /// Same task with an empty deadline collapsed to `None`.
    pub(crate) fn normalized(mut self) -> Self {
        self.deadline = normalize_deadline(self.deadline.take());
        self
    }
}

pub(crate) fn normalize_deadline(deadline: Option<String>) -> Option<String> {
    deadline.filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new("write report", Some("2024-07-01".to_string()));
        assert!(!task.done);
        assert_eq!(task.text, "write report");
        assert_eq!(task.deadline.as_deref(), Some("2024-07-01"));
    }

    #[test]
    fn test_empty_deadline_becomes_none() {
        let task = Task::new("call mom", Some(String::new()));
        assert_eq!(task.deadline, None);
        assert_eq!(task.deadline_str(), "");
    }

    #[test]
    fn test_deserialize_without_deadline_field() {
        let task: Task = serde_json::from_str(r#"{"text": "a", "done": true}"#).unwrap();
        assert_eq!(task.deadline, None);
        assert!(task.done);
    }

    #[test]
    fn test_serialize_writes_null_deadline() {
        let json = serde_json::to_string(&Task::new("a", None)).unwrap();
        assert_eq!(json, r#"{"text":"a","done":false,"deadline":null}"#);
    }

    #[test]
    fn test_normalized_clears_empty_deadline() {
        let task = Task {
            text: "x".to_string(),
            done: false,
            deadline: Some(String::new()),
        };
        assert_eq!(task.normalized().deadline, None);
    }
}
