//! # Header Component
//!
//! Two rows at the top of the screen: the centered, bold title and a
//! full-width `=` separator under it.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

pub struct Header {
    pub title: String,
    pub color: Color,
}

impl Header {
    pub const HEIGHT: u16 = 2;
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, separator_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let style = Style::default().fg(self.color);
        let title = Paragraph::new(Line::from(self.title.as_str()).centered())
            .style(style.add_modifier(Modifier::BOLD));
        frame.render_widget(title, title_area);

        let separator = "=".repeat(separator_area.width as usize);
        frame.render_widget(Paragraph::new(separator).style(style), separator_area);
    }
}
