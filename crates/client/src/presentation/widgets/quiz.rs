//! Multiple-choice quiz canvas.

use mechanics_content::QuizBoard;
use mechanics_content::quiz::{CORRECT, OPTIONS, QUESTION, TAG};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::hits::{HitMap, HitTarget, UiButton};
use crate::presentation::theme::Theme;

use super::button;

pub fn render(frame: &mut Frame, area: Rect, board: &mut QuizBoard, hits: &mut HitMap) {
    let [header_area, options_area, explanation_area, actions_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(OPTIONS.len() as u16 * 2),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(TAG, Theme::tag()),
            Line::raw(""),
            Line::styled(QUESTION, Theme::title()),
        ]),
        header_area,
    );

    for (idx, option) in OPTIONS.iter().enumerate() {
        let option_area = Rect {
            x: options_area.x,
            y: options_area.y + idx as u16 * 2,
            width: options_area.width.min(40),
            height: 1,
        };
        if option_area.bottom() > options_area.bottom() {
            break;
        }

        let style = match board.selected() {
            Some(selected) if idx == CORRECT && selected == idx => Theme::success(),
            Some(selected) if selected == idx => Theme::error(),
            Some(_) if idx == CORRECT => Theme::success(),
            Some(_) => Theme::hint(),
            None => Theme::chip(),
        };
        let label = format!(" {}. {option} ", idx + 1);
        frame.render_widget(Paragraph::new(Line::styled(label, style)), option_area);
        if !board.is_answered() {
            hits.push(option_area, HitTarget::Option(idx));
        }
    }

    if let Some(explanation) = board.explanation() {
        let style = if board.is_correct() == Some(true) {
            Theme::success()
        } else {
            Theme::error()
        };
        frame.render_widget(
            Paragraph::new(Line::styled(explanation, style)).wrap(Wrap { trim: true }),
            explanation_area,
        );

        let retry_area = Rect { width: 20.min(actions_area.width), ..actions_area };
        button(frame, retry_area, "Tentar novamente [r]", UiButton::Retry, hits);
    } else {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "Escolha a alternativa correta.",
                Theme::hint(),
            )),
            explanation_area,
        );
    }
}
