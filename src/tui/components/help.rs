//! # Help Panel
//!
//! Static key reference in a centered bordered box, plus a color legend
//! for the urgency tiers. Any key closes it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use crate::core::urgency::Tier;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const HELP_LINES: &[&str] = &[
    "Vim Todo List Help",
    "",
    "Navigation:",
    "  j/k - Move cursor down/up",
    "",
    "Actions:",
    "  a - Add new todo",
    "  e - Edit current todo",
    "  d - Delete current todo",
    "  x - Toggle completion status",
    "  t - Toggle days mode",
    "  s - Toggle sorting mode",
    "  :w - Save todos",
    "  :q - Quit",
    "",
];

const LEGEND: [Tier; 6] = [
    Tier::Overdue,
    Tier::Today,
    Tier::Urgent,
    Tier::Soon,
    Tier::Distant,
    Tier::None,
];

const FOOTER: &str = "Press any key to return";

pub struct HelpPanel<'a> {
    pub theme: &'a Theme,
}

impl HelpPanel<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let text_style = Style::default().fg(self.theme.chrome);
        let mut lines: Vec<Line> = HELP_LINES
            .iter()
            .map(|l| Line::styled(*l, text_style))
            .collect();
        lines[0] = Line::styled(HELP_LINES[0], text_style.add_modifier(Modifier::BOLD));

        lines.push(Line::styled("Deadline colors:", text_style));
        let legend: Vec<Span> = LEGEND
            .iter()
            .flat_map(|tier| {
                [
                    Span::raw(" "),
                    Span::styled(tier.label(), Style::default().fg(self.theme.tier_color(*tier))),
                ]
            })
            .collect();
        lines.push(Line::from(legend));
        lines.push(Line::default());
        lines.push(Line::styled(FOOTER, text_style));
        lines
    }
}

impl Component for HelpPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        // border (2) + padding (2) on each axis
        let width = (content_width + 4).min(area.width);
        let height = (lines.len() as u16 + 4).min(area.height);
        let panel = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, panel);
        let block = Block::bordered()
            .border_style(Style::default().fg(self.theme.chrome))
            .padding(Padding::uniform(1));
        frame.render_widget(Paragraph::new(lines).block(block), panel);
    }
}
