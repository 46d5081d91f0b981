//! Equation balance canvas.

use mechanics_content::EquationBoard;
use mechanics_content::equation::{LEFT_BASE, RIGHT_BASE, T1, T2};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::hits::{HitMap, HitTarget, region};
use crate::presentation::theme::Theme;

use super::{drag_proxy, feedback_line, slot_box};

pub fn render(frame: &mut Frame, area: Rect, board: &mut EquationBoard, hits: &mut HitMap) {
    let [title_area, equation_area, bank_area, feedback_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Arraste os números para balancear a equação",
            Theme::title(),
        )),
        title_area,
    );

    let [left_label, left_slot, middle_label, right_slot] = Layout::horizontal([
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(6),
    ])
    .areas(equation_area);

    frame.render_widget(
        Paragraph::new(format!("\n{LEFT_BASE} + ")),
        left_label,
    );
    frame.render_widget(
        Paragraph::new(format!("\n = {RIGHT_BASE} - ")),
        middle_label,
    );

    let placements = board.session.placements();
    slot_box(frame, left_slot, placements.get(T1).map(|p| p.to_string()));
    slot_box(frame, right_slot, placements.get(T2).map(|p| p.to_string()));

    board
        .session
        .set_targets(vec![(T1, region(left_slot)), (T2, region(right_slot))]);

    render_bank(frame, bank_area, board, hits);
    feedback_line(
        frame,
        feedback_area,
        board.session.feedback(),
        "Solte um número em cada espaço vazio.",
    );

    if let Some((payload, at)) = board.session.drag_proxy() {
        drag_proxy(frame, &format!(" {payload} "), at.x, at.y);
    }
}

fn render_bank(frame: &mut Frame, area: Rect, board: &EquationBoard, hits: &mut HitMap) {
    let mut x = area.x;
    for payload in board.bank() {
        let label = format!(" {payload} ");
        let width = label.chars().count() as u16 + 2;
        let chip_area = Rect {
            x,
            y: area.y + 1,
            width: width.min(area.width.saturating_sub(x - area.x)),
            height: 1,
        };
        if chip_area.width == 0 {
            break;
        }

        let used = board.session.placements().is_used(payload);
        let style = if used { Theme::chip_used() } else { Theme::chip() };
        frame.render_widget(Paragraph::new(Line::styled(label, style)), chip_area);
        if !used {
            hits.push(chip_area, HitTarget::Chip(payload));
        }
        x += width + 1;
    }
}
