//! Color palette for the list view, resolved once from configuration.

use std::str::FromStr;

use log::warn;
use ratatui::style::Color;

use crate::core::config::ColorConfig;
use crate::core::urgency::Tier;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub overdue: Color,
    pub today: Color,
    pub urgent: Color,
    pub soon: Color,
    pub distant: Color,
    pub untimed: Color,
    /// Text of pending tasks.
    pub text: Color,
    /// Title, separator, status line and help panel.
    pub chrome: Color,
    /// Prompt popup border.
    pub prompt: Color,
    /// Checkbox of pending tasks.
    pub checkbox: Color,
    /// Checkbox of completed tasks.
    pub checkbox_done: Color,
    /// Text and deadline of completed tasks (drawn dim).
    pub done: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            overdue: Color::Red,
            today: Color::LightRed,
            urgent: Color::Yellow,
            soon: Color::Cyan,
            distant: Color::Green,
            untimed: Color::White,
            text: Color::Magenta,
            chrome: Color::Blue,
            prompt: Color::Yellow,
            checkbox: Color::Rgb(230, 230, 230),
            checkbox_done: Color::Green,
            done: Color::White,
        }
    }
}

impl Theme {
    pub fn from_config(colors: &ColorConfig) -> Self {
        let defaults = Self::default();
        Self {
            overdue: pick("overdue", colors.overdue.as_deref(), defaults.overdue),
            today: pick("today", colors.today.as_deref(), defaults.today),
            urgent: pick("urgent", colors.urgent.as_deref(), defaults.urgent),
            soon: pick("soon", colors.soon.as_deref(), defaults.soon),
            distant: pick("distant", colors.distant.as_deref(), defaults.distant),
            untimed: pick("untimed", colors.untimed.as_deref(), defaults.untimed),
            text: pick("text", colors.text.as_deref(), defaults.text),
            chrome: pick("chrome", colors.chrome.as_deref(), defaults.chrome),
            prompt: pick("prompt", colors.prompt.as_deref(), defaults.prompt),
            ..defaults
        }
    }

    pub fn tier_color(&self, tier: Tier) -> Color {
        match tier {
            Tier::None => self.untimed,
            Tier::Overdue => self.overdue,
            Tier::Today => self.today,
            Tier::Urgent => self.urgent,
            Tier::Soon => self.soon,
            Tier::Distant => self.distant,
        }
    }
}

fn pick(name: &str, value: Option<&str>, fallback: Color) -> Color {
    match value {
        Some(raw) => Color::from_str(raw).unwrap_or_else(|_| {
            warn!("Unknown color {:?} for colors.{}, using {}", raw, name, fallback);
            fallback
        }),
        None => fallback,
    }
}
