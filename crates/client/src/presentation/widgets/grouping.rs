//! Strategic grouping canvas: combine chips into sums of ten.

use mechanics_content::GroupingBoard;
use mechanics_content::grouping::TARGET;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::hits::{HitMap, HitTarget, UiButton};
use crate::presentation::theme::Theme;

use super::{button, feedback_line};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    board: &mut GroupingBoard,
    input_buffer: &str,
    hits: &mut HitMap,
) {
    let [title_area, chips_area, status_area, actions_area, feedback_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("Agrupe fichas que somem {TARGET}"),
            Theme::title(),
        )),
        title_area,
    );

    render_chips(frame, chips_area, board, hits);

    let status = format!(
        "Selecionadas: {} (soma {})  |  Movimentos: {}",
        board.selected_count(),
        board.selected_sum(),
        board.moves(),
    );
    frame.render_widget(Paragraph::new(Line::styled(status, Theme::hint())), status_area);

    if board.is_won() {
        frame.render_widget(
            Paragraph::new(Line::styled("Tabuleiro dominado!", Theme::success())),
            actions_area,
        );
    } else if board.is_stuck() {
        let prompt = format!("Quanto resta no total? {input_buffer}_  (Enter confirma)");
        frame.render_widget(
            Paragraph::new(Line::styled(prompt, Theme::incomplete())),
            actions_area,
        );
    } else {
        let combine_area = Rect { width: 18.min(actions_area.width), ..actions_area };
        button(frame, combine_area, "Agrupar [Enter]", UiButton::Combine, hits);
    }

    feedback_line(
        frame,
        feedback_area,
        board.feedback(),
        "Clique nas fichas para selecionar, depois agrupe.",
    );
}

fn render_chips(frame: &mut Frame, area: Rect, board: &GroupingBoard, hits: &mut HitMap) {
    let mut x = area.x;
    for &(id, value) in board.chips() {
        let label = format!(" {value} ");
        let width = label.chars().count() as u16 + 2;
        let chip_area = Rect { x, y: area.y + 1, width, height: 1 };
        if chip_area.right() > area.right() {
            break;
        }

        let style = if board.is_selected(id) {
            Theme::card_selected()
        } else {
            Theme::chip()
        };
        frame.render_widget(Paragraph::new(Line::styled(label, style)), chip_area);
        if !board.is_won() && !board.is_stuck() {
            hits.push(chip_area, HitTarget::GroupChip(id));
        }
        x += width + 1;
    }
}
