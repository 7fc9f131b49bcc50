//! # Task List Component
//!
//! One row per task in display order:
//!
//! ```text
//! > [ ] water plants                               (in 2d)
//!   [x] file taxes                             (2024-04-15)
//! ```
//!
//! The cursor row carries the `>` marker. Completed tasks are drawn dim.
//! The deadline annotation is right-aligned and colored by urgency tier;
//! with day counts on it reads `(in Nd)` / `(overdue Nd)` instead of the
//! raw text. A deadline that parses as none of the grammars is still shown,
//! verbatim and in the untimed color, so a typo stays visible. Rows that
//! don't fit are not drawn; the list scrolls to keep the cursor row on
//! screen.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TaskListState` lives in `TuiState`
//! - `TaskList` is created each frame with borrowed state

use chrono::NaiveDateTime;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{HighlightSpacing, List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::deadline;
use crate::core::sort::DisplayEntry;
use crate::core::task::Task;
use crate::core::urgency::{self, days_until};
use crate::tui::theme::Theme;

const CURSOR_MARKER: &str = "> ";
const CHECKBOX_WIDTH: usize = 4; // "[x] "

/// Persistent scroll state for the list.
#[derive(Default)]
pub struct TaskListState {
    pub list_state: ListState,
}

/// Transient render wrapper for the task list.
pub struct TaskList<'a> {
    pub state: &'a mut TaskListState,
    pub entries: &'a [DisplayEntry<'a>],
    pub cursor: usize,
    pub show_days: bool,
    pub now: NaiveDateTime,
    pub theme: &'a Theme,
}

impl TaskList<'_> {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let row_width = (area.width as usize).saturating_sub(CURSOR_MARKER.len());
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| ListItem::new(self.row(entry.task, row_width)))
            .collect();

        let selected = (!self.entries.is_empty()).then(|| self.cursor.min(self.entries.len() - 1));
        self.state.list_state.select(selected);

        let list = List::new(items)
            .highlight_symbol(CURSOR_MARKER)
            .highlight_spacing(HighlightSpacing::Always);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }

    fn row(&self, task: &Task, width: usize) -> Line<'static> {
        let theme = self.theme;
        let dim = Style::default().fg(theme.done).add_modifier(Modifier::DIM);

        let (checkbox, checkbox_style) = if task.done {
            ("[x] ", Style::default().fg(theme.checkbox_done))
        } else {
            ("[ ] ", Style::default().fg(theme.checkbox))
        };
        let text_style = if task.done {
            dim
        } else {
            Style::default().fg(theme.text)
        };

        let label = deadline_label(task, self.show_days, self.now);
        let label_width = label.as_ref().map_or(0, |l| l.width() + 1);
        let text_width = width.saturating_sub(CHECKBOX_WIDTH + label_width);

        let mut spans = vec![
            Span::styled(checkbox, checkbox_style),
            Span::styled(fit_width(&task.text, text_width), text_style),
        ];
        if let Some(label) = label {
            let label_style = if task.done {
                dim
            } else {
                let tier = urgency::classify(task.deadline_str(), self.now);
                Style::default().fg(theme.tier_color(tier))
            };
            spans.push(Span::styled(label, label_style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

/// The parenthesized deadline annotation, or `None` for untimed tasks.
///
/// Unparsable deadlines are shown verbatim in both modes since there is no
/// day count to compute.
pub fn deadline_label(task: &Task, show_days: bool, now: NaiveDateTime) -> Option<String> {
    let raw = task.deadline.as_deref()?;
    match deadline::parse(raw, now) {
        Some(due) if show_days => {
            let days = days_until(due, now);
            if days < 0 {
                Some(format!("(overdue {}d)", -days))
            } else {
                Some(format!("(in {days}d)"))
            }
        }
        _ => Some(format!("({raw})")),
    }
}

/// Truncate or right-pad `text` to exactly `width` display columns.
fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sort::storage_order;
    use crate::test_support::{fixed_now, task};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_rows(tasks: &[Task], cursor: usize, show_days: bool, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let entries = storage_order(tasks);
        let theme = Theme::default();
        let mut state = TaskListState::default();

        terminal
            .draw(|f| {
                TaskList {
                    state: &mut state,
                    entries: &entries,
                    cursor,
                    show_days,
                    now: fixed_now(),
                    theme: &theme,
                }
                .render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_deadline_label_modes() {
        let now = fixed_now();
        let t = task("a", false, Some("in 3 days"));
        assert_eq!(deadline_label(&t, false, now).as_deref(), Some("(in 3 days)"));
        assert_eq!(deadline_label(&t, true, now).as_deref(), Some("(in 3d)"));

        let late = task("b", false, Some("2024-06-10"));
        assert_eq!(deadline_label(&late, true, now).as_deref(), Some("(overdue 6d)"));

        let garbage = task("c", false, Some("someday"));
        assert_eq!(deadline_label(&garbage, true, now).as_deref(), Some("(someday)"));

        assert_eq!(deadline_label(&task("d", false, None), true, now), None);
    }

    #[test]
    fn test_fit_width_pads_and_truncates() {
        assert_eq!(fit_width("abc", 5), "abc  ");
        assert_eq!(fit_width("abcdef", 3), "abc");
        assert_eq!(fit_width("日本語", 5), "日本 ");
        assert_eq!(fit_width("x", 0), "");
    }

    #[test]
    fn test_rows_show_cursor_checkbox_and_right_aligned_deadline() {
        let tasks = vec![
            task("water plants", false, Some("in 2 days")),
            task("file taxes", true, None),
        ];
        let rows = render_rows(&tasks, 0, true, 40, 2);
        assert!(rows[0].starts_with("> [ ] water plants"));
        assert!(rows[0].ends_with("(in 2d) "));
        assert!(rows[1].starts_with("  [x] file taxes"));
    }

    #[test]
    fn test_long_text_is_truncated_before_deadline() {
        let tasks = vec![task(&"x".repeat(100), false, Some("12-31"))];
        let rows = render_rows(&tasks, 0, false, 30, 1);
        assert!(rows[0].ends_with("x(12-31) "));
        assert_eq!(rows[0].matches('x').count(), 30 - 2 - 4 - 8);
    }

    #[test]
    fn test_unparsable_deadline_is_drawn_verbatim_in_both_modes() {
        let tasks = vec![task("plan trip", false, Some("someday"))];
        for show_days in [false, true] {
            let rows = render_rows(&tasks, 0, show_days, 40, 1);
            assert!(rows[0].ends_with("(someday) "), "show_days={show_days}");
        }
    }

    #[test]
    fn test_rows_beyond_height_are_not_drawn() {
        let tasks: Vec<Task> = (0..5).map(|i| task(&format!("task {i}"), false, None)).collect();
        let rows = render_rows(&tasks, 0, false, 20, 3);
        assert!(rows[2].contains("task 2"));
        assert!(!rows.iter().any(|r| r.contains("task 3")));
    }

    #[test]
    fn test_cursor_row_scrolls_into_view() {
        let tasks: Vec<Task> = (0..5).map(|i| task(&format!("task {i}"), false, None)).collect();
        let rows = render_rows(&tasks, 4, false, 20, 3);
        assert!(rows[2].starts_with("> [ ] task 4"));
    }
}
