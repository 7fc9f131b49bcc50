//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing changes without a key press, so the loop is simple: draw, block
//! on the next event, dispatch it, repeat. The clock is read once per
//! iteration and the same instant is used for drawing and for resolving the
//! following key, so the cursor always refers to the row the user saw.

mod component;
pub mod components;
pub mod controller;
pub mod event;
pub mod theme;
mod ui;

use log::info;
use std::io::stdout;

use chrono::Local;
use crossterm::cursor::SetCursorStyle;
use crossterm::execute;

use crate::core::action::Effect;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::components::TaskListState;
use crate::tui::controller::Mode;
use crate::tui::event::read_event;
use crate::tui::theme::Theme;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub mode: Mode,
    pub task_list: TaskListState,
    pub theme: Theme,
    pub title: String,
}

impl TuiState {
    pub fn new(theme: Theme, title: impl Into<String>) -> Self {
        Self {
            mode: Mode::Normal,
            task_list: TaskListState::default(),
            theme,
            title: title.into(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Steady block: set_cursor_position on every draw resets the blink timer
        execute!(stdout(), SetCursorStyle::SteadyBlock)?;
        info!("Terminal modes enabled (steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(Theme::from_config(&config.colors), config.title.clone());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    ratatui::restore();
    info!("Exited with {} tasks in memory", app.store.len());
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    loop {
        let now = Local::now().naive_local();
        terminal.draw(|f| ui::draw_ui(f, app, tui, now))?;

        let event = read_event()?;
        if controller::handle_event(app, tui, &event, now) == Effect::Quit {
            return Ok(());
        }
    }
}
