//! # TUI Components
//!
//! Everything drawn on screen, one file per piece.
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! Receive everything they show as struct fields:
//! - `Header`: centered title and separator
//! - `StatusLine`: completion count and mode flags
//! - `HelpPanel`: key reference popup
//!
//! ## Stateful Components
//!
//! - `TaskList`: transient wrapper over `TaskListState`, which keeps the
//!   scroll offset between frames
//! - `Prompt`: one-line text box that owns its buffer and cursor and emits
//!   `PromptEvent`s
//!
//! ```text
//! components/
//! ├── header.rs
//! ├── help.rs
//! ├── prompt/       (text box + cursor math)
//! ├── status_line.rs
//! └── task_list.rs
//! ```

mod header;
pub use header::Header;
pub mod help;
pub use help::HelpPanel;
pub mod prompt;
mod status_line;
pub use status_line::StatusLine;
pub mod task_list;
pub use task_list::{TaskList, TaskListState};
