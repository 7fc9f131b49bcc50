use chrono::NaiveDateTime;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Header, HelpPanel, StatusLine, TaskList};
use crate::tui::controller::Mode;

/// Draw one frame: header, task rows, status line, then whatever popup the
/// current mode calls for.
///
/// ```text
/// ┌──────────────────────────┐
/// │       Vim Todo List      │ header (2)
/// │==========================│
/// │                          │ spacer
/// │> [ ] task ...   (in 2d)  │ list
/// │                          │ spacer
/// │3/7 completed  [D][S]     │ status
/// └──────────────────────────┘
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: NaiveDateTime) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(Header::HEIGHT), Length(1), Min(0), Length(1), Length(1)]);
    let [header_area, _, list_area, _, status_area] = layout.areas(frame.area());

    Header {
        title: tui.title.clone(),
        color: tui.theme.chrome,
    }
    .render(frame, header_area);

    let entries = app.display_entries(now);
    TaskList {
        state: &mut tui.task_list,
        entries: &entries,
        cursor: app.store.cursor(),
        show_days: app.show_days,
        now,
        theme: &tui.theme,
    }
    .render(frame, list_area);

    StatusLine {
        completed: app.store.completed(),
        total: app.store.len(),
        show_days: app.show_days,
        sort_by_urgency: app.sort_by_urgency,
        color: tui.theme.chrome,
    }
    .render(frame, status_area);

    match &mut tui.mode {
        Mode::Normal => {}
        Mode::Prompt(pending) => pending.prompt.render(frame, frame.area()),
        Mode::Help => HelpPanel { theme: &tui.theme }.render(frame, frame.area()),
    }
}
