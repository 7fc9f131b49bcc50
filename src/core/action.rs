//! # Actions
//!
//! Everything that can happen to the todo list becomes an `Action`.
//! User presses `x`? The controller resolves the cursor to a storage index
//! and sends `Action::Toggle(index)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the host loop what to do next.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Indices in actions are always storage indices. Display-order translation
//! happens before an action is built.

use chrono::NaiveDateTime;
use log::{debug, info, warn};

use crate::core::deadline;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveCursorUp,
    MoveCursorDown,
    Toggle(usize),
    Delete(usize),
    Add {
        text: String,
        deadline: Option<String>,
    },
    Edit {
        index: usize,
        text: String,
        deadline: Option<String>,
    },
    ToggleShowDays,
    ToggleSortByUrgency,
    Save,
    Quit,
}

/// What the host loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action, now: NaiveDateTime) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::MoveCursorUp => app.store.move_cursor_up(),
        Action::MoveCursorDown => app.store.move_cursor_down(),
        Action::Toggle(index) => app.store.toggle(index),
        Action::Delete(index) => app.store.delete(index),
        Action::Add { text, deadline } => {
            note_untimed(deadline.as_deref(), now);
            app.store.add(text, deadline);
        }
        Action::Edit {
            index,
            text,
            deadline,
        } => {
            note_untimed(deadline.as_deref(), now);
            app.store.edit(index, text, deadline);
        }
        Action::ToggleShowDays => app.show_days = !app.show_days,
        Action::ToggleSortByUrgency => app.sort_by_urgency = !app.sort_by_urgency,
        Action::Save => match app.store.save() {
            Ok(()) => info!("Saved {} tasks to {}", app.store.len(), app.store.location()),
            Err(e) => warn!("Save failed: {}", e),
        },
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

/// Unparsable deadlines are kept verbatim; the task just renders as untimed.
fn note_untimed(deadline: Option<&str>, now: NaiveDateTime) {
    if let Some(d) = deadline
        && !deadline::is_valid(d, now)
    {
        debug!("Deadline {:?} is not a recognized format, task stays untimed", d);
    }
}
