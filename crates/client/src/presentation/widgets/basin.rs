//! River basin builder canvas: palette, grid, and level controls.

use mechanics_content::{BasinBoard, PieceKind, Tile};
use mechanics_content::basin::GRID_SIZE;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use strum::IntoEnumIterator;

use crate::hits::{HitMap, HitTarget, UiButton};
use crate::presentation::theme::Theme;

use super::{button, feedback_line, slot_box};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, board: &mut BasinBoard, hits: &mut HitMap) {
    let [title_area, palette_area, grid_area, actions_area, feedback_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(GRID_SIZE as u16 * CELL_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("Monte a bacia hidrográfica - fase {:02}", board.level()),
            Theme::title(),
        )),
        title_area,
    );

    render_palette(frame, palette_area, board, hits);
    render_grid(frame, grid_area, board, hits);

    let [validate_area, level_area] = Layout::horizontal([
        Constraint::Length(14),
        Constraint::Length(14),
    ])
    .areas(actions_area);
    button(frame, validate_area, "Validar [v]", UiButton::Validate, hits);
    let level_label = if board.level() == 1 { "Fase 02 [m]" } else { "Fase 01 [m]" };
    button(frame, level_area, level_label, UiButton::ToggleVariant, hits);

    feedback_line(
        frame,
        feedback_area,
        board.feedback(),
        "Escolha uma peça e clique no mapa. Clique direito remove.",
    );
}

fn render_palette(frame: &mut Frame, area: Rect, board: &BasinBoard, hits: &mut HitMap) {
    let mut x = area.x;
    for (idx, piece) in PieceKind::iter().enumerate() {
        let label = format!(" {} {piece} ", idx + 1);
        let width = label.chars().count() as u16;
        let piece_area = Rect { x, y: area.y, width, height: 1 };
        if piece_area.right() > area.right() {
            break;
        }

        let style = if piece == board.selected() {
            Theme::card_selected()
        } else {
            Theme::chip()
        };
        frame.render_widget(Paragraph::new(Line::styled(label, style)), piece_area);
        hits.push(piece_area, HitTarget::Piece(piece));
        x += width + 1;
    }
}

fn render_grid(frame: &mut Frame, area: Rect, board: &BasinBoard, hits: &mut HitMap) {
    for (row, tiles) in board.grid().iter().enumerate() {
        for (col, tile) in tiles.iter().enumerate() {
            let cell_area = Rect {
                x: area.x + col as u16 * CELL_WIDTH,
                y: area.y + row as u16 * CELL_HEIGHT,
                width: CELL_WIDTH,
                height: CELL_HEIGHT,
            };
            if cell_area.right() > area.right() || cell_area.bottom() > area.bottom() {
                continue;
            }
            slot_box(frame, cell_area, tile.kind.map(|_| glyph(tile).to_string()));
            hits.push(cell_area, HitTarget::Cell { row, col });
        }
    }
}

/// One-character sketch of a tile, honoring its rotation.
fn glyph(tile: &Tile) -> char {
    match tile.kind {
        Some(PieceKind::Nascente) => '◉',
        Some(PieceKind::Reto) => {
            if tile.rotation % 2 == 0 {
                '─'
            } else {
                '│'
            }
        }
        Some(PieceKind::Curva) => match tile.rotation % 4 {
            0 => '└',
            1 => '┌',
            2 => '┐',
            _ => '┘',
        },
        Some(PieceKind::Afluente) => '┬',
        Some(PieceKind::Foz) => '▼',
        None => ' ',
    }
}
