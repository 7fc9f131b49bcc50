//! # Input Controller
//!
//! Turns key events into core actions. Which keys mean what depends on the
//! current [`Mode`]:
//!
//! ```text
//! Normal ──a/e/d/:──▶ Prompt ──Enter/Esc──▶ Normal (or the next Prompt)
//!   │
//!   └──h──▶ Help ──any key──▶ Normal
//! ```
//!
//! Multi-step flows (add asks for text then deadline, edit asks for both
//! pre-filled) are a chain of prompts. Each step carries what the earlier
//! steps collected, so the chain survives redraws between keys.
//!
//! Storage indices are resolved when a flow starts. The display order the
//! user saw is the one the key acts on.

use chrono::NaiveDateTime;
use log::debug;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::EventHandler;
use crate::tui::components::prompt::{Prompt, PromptEvent};
use crate::tui::event::TuiEvent;

const ADD_TITLE: &str = "Add todo";
const DEADLINE_TITLE: &str = "Deadline (YYYY-MM-DD, MM-DD, or 'in X days')";
const EDIT_TITLE: &str = "Edit Todo";
const EDIT_DEADLINE_TITLE: &str = "Edit Deadline";
const DELETE_TITLE: &str = "Input y to delete";
const COMMAND_TITLE: &str = "Command";

pub enum Mode {
    Normal,
    Prompt(PendingPrompt),
    Help,
}

/// An open prompt and the flow step its answer feeds.
pub struct PendingPrompt {
    step: Step,
    pub prompt: Prompt,
}

enum Step {
    AddText,
    AddDeadline {
        text: String,
    },
    EditText {
        index: usize,
        old_text: String,
        old_deadline: String,
    },
    EditDeadline {
        index: usize,
        old_text: String,
        old_deadline: String,
        new_text: String,
    },
    ConfirmDelete {
        index: usize,
    },
    Command,
}

/// Dispatch one key event. `now` must be the instant the visible frame was
/// drawn at.
pub fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: &TuiEvent,
    now: NaiveDateTime,
) -> Effect {
    if matches!(event, TuiEvent::Resize) {
        return Effect::None;
    }

    match std::mem::replace(&mut tui.mode, Mode::Normal) {
        Mode::Normal => handle_normal(app, tui, event, now),
        // Any key dismisses help and is otherwise swallowed
        Mode::Help => Effect::None,
        Mode::Prompt(mut pending) => {
            match pending.prompt.handle_event(event).and_then(PromptEvent::into_value) {
                Some(value) => finish_step(app, tui, pending.step, value, now),
                None => {
                    tui.mode = Mode::Prompt(pending);
                    Effect::None
                }
            }
        }
    }
}

fn handle_normal(app: &mut App, tui: &mut TuiState, event: &TuiEvent, now: NaiveDateTime) -> Effect {
    match event {
        TuiEvent::InputChar('j') | TuiEvent::CursorDown => update(app, Action::MoveCursorDown, now),
        TuiEvent::InputChar('k') | TuiEvent::CursorUp => update(app, Action::MoveCursorUp, now),
        TuiEvent::InputChar('x') => match app.selected_index(now) {
            Some(index) => update(app, Action::Toggle(index), now),
            None => Effect::None,
        },
        TuiEvent::InputChar('d') => {
            if let Some(index) = app.selected_index(now) {
                open_prompt(tui, Step::ConfirmDelete { index }, DELETE_TITLE, "");
            }
            Effect::None
        }
        TuiEvent::InputChar('a') => {
            open_prompt(tui, Step::AddText, ADD_TITLE, "");
            Effect::None
        }
        TuiEvent::InputChar('e') => {
            if let Some(index) = app.selected_index(now)
                && let Some(task) = app.store.get(index)
            {
                let old_text = task.text.clone();
                let old_deadline = task.deadline_str().to_string();
                let initial = old_text.clone();
                let step = Step::EditText {
                    index,
                    old_text,
                    old_deadline,
                };
                open_prompt(tui, step, EDIT_TITLE, &initial);
            }
            Effect::None
        }
        TuiEvent::InputChar(':') => {
            open_prompt(tui, Step::Command, COMMAND_TITLE, "");
            Effect::None
        }
        TuiEvent::InputChar('h') => {
            tui.mode = Mode::Help;
            Effect::None
        }
        TuiEvent::InputChar('t') => update(app, Action::ToggleShowDays, now),
        TuiEvent::InputChar('s') => update(app, Action::ToggleSortByUrgency, now),
        _ => Effect::None,
    }
}

fn finish_step(
    app: &mut App,
    tui: &mut TuiState,
    step: Step,
    value: String,
    now: NaiveDateTime,
) -> Effect {
    match step {
        Step::AddText => {
            if !value.is_empty() {
                open_prompt(tui, Step::AddDeadline { text: value }, DEADLINE_TITLE, "");
            }
            Effect::None
        }
        Step::AddDeadline { text } => update(
            app,
            Action::Add {
                text,
                deadline: non_empty(value),
            },
            now,
        ),
        Step::EditText {
            index,
            old_text,
            old_deadline,
        } => {
            let initial = old_deadline.clone();
            let step = Step::EditDeadline {
                index,
                old_text,
                old_deadline,
                new_text: value,
            };
            open_prompt(tui, step, EDIT_DEADLINE_TITLE, &initial);
            Effect::None
        }
        Step::EditDeadline {
            index,
            old_text,
            old_deadline,
            new_text,
        } => {
            if new_text == old_text && value == old_deadline {
                return Effect::None;
            }
            update(
                app,
                Action::Edit {
                    index,
                    text: new_text,
                    deadline: non_empty(value),
                },
                now,
            )
        }
        Step::ConfirmDelete { index } => {
            if value == "y" {
                update(app, Action::Delete(index), now)
            } else {
                Effect::None
            }
        }
        Step::Command => match value.as_str() {
            "w" => update(app, Action::Save, now),
            "q" => update(app, Action::Quit, now),
            "wq" => {
                update(app, Action::Save, now);
                update(app, Action::Quit, now)
            }
            "" => Effect::None,
            other => {
                debug!("Unknown command {:?}", other);
                Effect::None
            }
        },
    }
}

fn open_prompt(tui: &mut TuiState, step: Step, title: &str, initial: &str) {
    let prompt = Prompt::new(title, initial, tui.theme.prompt);
    tui.mode = Mode::Prompt(PendingPrompt { step, prompt });
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
