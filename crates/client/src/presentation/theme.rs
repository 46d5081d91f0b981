//! Color scheme and styling rules for the terminal UI.

use mechanics_core::{Feedback, Verdict};
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn title() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn card() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn card_selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tag() -> Style {
        Style::default().fg(Color::LightMagenta)
    }

    /// Draggable chip still available in the bank.
    pub fn chip() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Chip already placed somewhere on the board.
    pub fn chip_used() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }

    pub fn slot_empty() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn slot_filled() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn drag_proxy() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::Black).bg(Color::Gray)
    }

    pub fn success() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn incomplete() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn verdict(feedback: &Feedback) -> Style {
        match feedback.verdict {
            Verdict::Success => Self::success(),
            Verdict::Error => Self::error(),
            Verdict::Incomplete => Self::incomplete(),
        }
    }
}
