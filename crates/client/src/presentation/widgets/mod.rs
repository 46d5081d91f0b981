//! Screen widgets: the gallery grid and one canvas per mechanic.

pub mod gallery;
pub mod playground;

mod basin;
mod biomes;
mod color_lab;
mod crossword;
mod equation;
mod external;
mod grouping;
mod quest;
mod quiz;
mod trophic;

use mechanics_core::Feedback;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::hits::{HitMap, HitTarget, UiButton};

use super::theme::Theme;

/// Renders the feedback banner for a board, or the fallback hint when
/// there is nothing to show.
fn feedback_line(frame: &mut Frame, area: Rect, feedback: Option<&Feedback>, idle_hint: &str) {
    let line = match feedback {
        Some(feedback) => {
            let text = feedback.message.clone().unwrap_or_default();
            Line::styled(text, Theme::verdict(feedback))
        }
        None => Line::styled(idle_hint.to_string(), Theme::hint()),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Draws a one-line button and registers its hit region.
fn button(frame: &mut Frame, area: Rect, label: &str, target: UiButton, hits: &mut HitMap) {
    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {label} "), Theme::button())),
        area,
    );
    hits.push(area, HitTarget::Button(target));
}

/// Bordered drop slot, filled or empty.
fn slot_box(frame: &mut Frame, area: Rect, content: Option<String>) {
    let style = if content.is_some() {
        Theme::slot_filled()
    } else {
        Theme::slot_empty()
    };
    let block = Block::bordered().border_style(style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if let Some(text) = content {
        frame.render_widget(Paragraph::new(text).centered(), inner);
    }
}

/// Draws the floating drag proxy on top of everything else.
fn drag_proxy(frame: &mut Frame, label: &str, x: u16, y: u16) {
    let area = frame.area();
    if y >= area.height || x >= area.width {
        return;
    }
    let max = usize::from(area.width - x);
    frame
        .buffer_mut()
        .set_stringn(x, y, label, max, Theme::drag_proxy());
}
