//! # Core Application Logic
//!
//! This module contains vimtodo's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Time is passed  │
//!                    │  in, never read here.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`task`]: The `Task` record and its persisted shape
//! - [`deadline`]: Free-form deadline parsing
//! - [`urgency`]: Deadline → color tier
//! - [`sort`]: Display order and the display → storage index mapping
//! - [`store`]: The task list, its cursor, and persistence
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum, everything that can happen in the app
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod config;
pub mod deadline;
pub mod sort;
pub mod state;
pub mod store;
pub mod task;
pub mod urgency;
