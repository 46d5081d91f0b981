//! English quest canvas: fill the sentence gap to cross each obstacle.

use mechanics_content::QuestStage;
use mechanics_content::quest::{ANSWER, PHASES};
use mechanics_core::Payload;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::hits::{HitMap, HitTarget, region};
use crate::presentation::theme::Theme;

use super::{drag_proxy, feedback_line, slot_box};

pub fn render(frame: &mut Frame, area: Rect, stage: &mut QuestStage, hits: &mut HitMap) {
    let [title_area, sentence_area, slot_area, options_area, feedback_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let phase = stage.phase();
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                format!("English Quest - etapa {}/{}", stage.phase_index() + 1, PHASES.len()),
                Theme::title(),
            ),
            Line::styled(format!("Obstáculo: {}", phase.obstacle), Theme::tag()),
        ]),
        title_area,
    );

    if stage.is_completed() {
        let lines = vec![
            Line::raw(""),
            Line::styled("Quest Complete!", Theme::success()),
            Line::styled("Você atravessou todos os obstáculos.", Theme::hint()),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), sentence_area.union(options_area));
        return;
    }

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(phase.sentence_before),
            Span::styled(" ____ ", Theme::slot_empty()),
            Span::raw(phase.sentence_after),
        ])),
        sentence_area,
    );

    let slot_rect = Rect {
        x: slot_area.x,
        y: slot_area.y,
        width: 12.min(slot_area.width),
        height: 3,
    };
    slot_box(frame, slot_rect, stage.filled_word().map(|p| p.to_string()));
    stage.set_targets(vec![(ANSWER, region(slot_rect))]);

    render_options(frame, options_area, phase.options, stage.is_crossing(), hits);

    if stage.is_crossing() {
        frame.render_widget(
            Paragraph::new(Line::styled("Atravessando...", Theme::success())),
            feedback_area,
        );
    } else {
        feedback_line(
            frame,
            feedback_area,
            stage.feedback(),
            "Arraste a palavra certa para o espaço.",
        );
    }

    if let Some((payload, at)) = stage.drag_proxy() {
        drag_proxy(frame, &format!(" {payload} "), at.x, at.y);
    }
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    options: &'static [&'static str],
    crossing: bool,
    hits: &mut HitMap,
) {
    let mut x = area.x;
    for &word in options {
        let label = format!(" {word} ");
        let width = label.chars().count() as u16 + 2;
        let chip_area = Rect { x, y: area.y + 1, width, height: 1 };
        if chip_area.right() > area.right() {
            break;
        }

        let style = if crossing { Theme::chip_used() } else { Theme::chip() };
        frame.render_widget(Paragraph::new(Line::styled(label, style)), chip_area);
        if !crossing {
            hits.push(chip_area, HitTarget::Chip(Payload::Label(word)));
        }
        x += width + 1;
    }
}
