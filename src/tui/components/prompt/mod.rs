//! # Prompt Component
//!
//! A one-line text box in a bordered popup, used for adding and editing
//! tasks, confirming deletes and typing `:` commands.
//!
//! ## Behavior
//!
//! - Printable characters insert at the cursor
//! - Backspace deletes before the cursor, Delete after it
//! - Left/Right/Home/End move the cursor
//! - Enter confirms with the current buffer
//! - Esc cancels, handing back the text the prompt was opened with
//!
//! The popup is centered, 3 rows tall and at most 60 columns wide. Text
//! longer than the box scrolls horizontally to keep the cursor in view.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary};

const MAX_WIDTH: u16 = 60;
const HEIGHT: u16 = 3;

/// High-level events emitted by the Prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    /// Enter pressed; carries the buffer.
    Confirm(String),
    /// Esc pressed; carries the original, pre-edit text.
    Cancel(String),
    /// Buffer or cursor changed.
    ContentChanged,
}

impl PromptEvent {
    /// The value the prompt settled on, if it is finished.
    pub fn into_value(self) -> Option<String> {
        match self {
            PromptEvent::Confirm(text) | PromptEvent::Cancel(text) => Some(text),
            PromptEvent::ContentChanged => None,
        }
    }
}

pub struct Prompt {
    pub title: String,
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Border color (Prop)
    pub color: Color,
    original: String,
    cursor: CursorState,
}

impl Prompt {
    /// Open a prompt pre-filled with `initial`, cursor at the end.
    pub fn new(title: impl Into<String>, initial: impl Into<String>, color: Color) -> Self {
        let initial = initial.into();
        Self {
            title: title.into(),
            cursor: CursorState::at_end(&initial),
            buffer: initial.clone(),
            original: initial,
            color,
        }
    }

    /// Popup rectangle centered in `area`.
    pub fn popup_area(area: Rect) -> Rect {
        let width = MAX_WIDTH.min(area.width.saturating_sub(4)).max(3).min(area.width);
        let height = HEIGHT.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl Component for Prompt {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let popup = Self::popup_area(area);
        frame.render_widget(Clear, popup);

        let block = Block::bordered()
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(self.color))
            .title(format!(" {} ", self.title));
        let inner = block.inner(popup);

        self.cursor.update_scroll(&self.buffer, inner.width);
        let text = Paragraph::new(self.buffer.as_str())
            .block(block)
            .scroll((0, self.cursor.scroll));
        frame.render_widget(text, popup);

        if inner.width > 0 && inner.height > 0 {
            let column = self.cursor.column(&self.buffer) - self.cursor.scroll;
            frame.set_cursor_position((inner.x + column, inner.y));
        }
    }
}

impl EventHandler for Prompt {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(PromptEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(PromptEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(PromptEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => self
                .cursor
                .left(&self.buffer)
                .then_some(PromptEvent::ContentChanged),
            TuiEvent::CursorRight => self
                .cursor
                .right(&self.buffer)
                .then_some(PromptEvent::ContentChanged),
            TuiEvent::CursorHome => (self.cursor.pos != 0).then(|| {
                self.cursor.pos = 0;
                PromptEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor.pos != self.buffer.len()).then(|| {
                self.cursor.pos = self.buffer.len();
                PromptEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(PromptEvent::Confirm(std::mem::take(&mut self.buffer))),
            TuiEvent::Escape => Some(PromptEvent::Cancel(self.original.clone())),
            _ => None,
        }
    }
}
