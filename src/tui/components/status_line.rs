//! # StatusLine Component
//!
//! Bottom row: completion count plus the two mode flags.
//!
//! ```text
//! 3/7 completed  [D][S]     day-count labels on, sorted by urgency
//! 3/7 completed  [ ][ ]     both off
//! ```
//!
//! Stateless: everything it shows arrives as props.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct StatusLine {
    pub completed: usize,
    pub total: usize,
    pub show_days: bool,
    pub sort_by_urgency: bool,
    pub color: Color,
}

impl StatusLine {
    pub fn text(&self) -> String {
        let days_flag = if self.show_days { "[D]" } else { "[ ]" };
        let sort_flag = if self.sort_by_urgency { "[S]" } else { "[ ]" };
        format!(
            "{}/{} completed  {}{}",
            self.completed, self.total, days_flag, sort_flag
        )
    }
}

impl Component for StatusLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().fg(self.color));
        frame.render_widget(span, area);
    }
}
