//! Arithmetic crossword canvas.

use mechanics_content::{Cell, CrosswordBoard};
use mechanics_content::crossword::{GRID, ROWS};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::hits::{HitMap, HitTarget, UiButton, region};
use crate::presentation::theme::Theme;

use super::{button, drag_proxy, feedback_line, slot_box};

const CELL_WIDTH: u16 = 6;
const CELL_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, board: &mut CrosswordBoard, hits: &mut HitMap) {
    let [title_area, grid_area, bank_area, feedback_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(ROWS as u16 * CELL_HEIGHT),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Complete o cruzadinha com os resultados corretos",
            Theme::title(),
        )),
        title_area,
    );

    let mut targets = Vec::new();
    for (row, cells) in GRID.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let cell_area = Rect {
                x: grid_area.x + col as u16 * CELL_WIDTH,
                y: grid_area.y + row as u16 * CELL_HEIGHT,
                width: CELL_WIDTH,
                height: CELL_HEIGHT,
            };
            if cell_area.right() > grid_area.right() || cell_area.bottom() > grid_area.bottom()
            {
                continue;
            }
            match cell {
                Some(Cell::Given(glyph)) => {
                    slot_box(frame, cell_area, Some((*glyph).to_string()));
                }
                Some(Cell::Target { slot, .. }) => {
                    let placed = board.session.placements().get(*slot);
                    slot_box(frame, cell_area, placed.map(|p| p.to_string()));
                    targets.push((*slot, region(cell_area)));
                }
                None => {}
            }
        }
    }
    board.session.set_targets(targets);

    render_bank(frame, bank_area, board, hits);
    feedback_line(
        frame,
        feedback_area,
        board.session.feedback(),
        "Preencha todos os espaços e verifique.",
    );

    if let Some((payload, at)) = board.session.drag_proxy() {
        drag_proxy(frame, &format!(" {payload} "), at.x, at.y);
    }
}

fn render_bank(frame: &mut Frame, area: Rect, board: &CrosswordBoard, hits: &mut HitMap) {
    let mut x = area.x;
    for payload in board.bank() {
        let label = format!(" {payload} ");
        let width = label.chars().count() as u16 + 2;
        let chip_area = Rect { x, y: area.y + 1, width, height: 1 };
        if chip_area.right() > area.right() {
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

    let validate_area = Rect {
        x,
        y: area.y + 1,
        width: 16.min(area.right().saturating_sub(x)),
        height: 1,
    };
    if validate_area.width > 0 {
        button(frame, validate_area, "Verificar [v]", UiButton::Validate, hits);
    }
}
