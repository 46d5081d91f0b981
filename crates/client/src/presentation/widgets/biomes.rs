//! Biomas do Brasil canvas: map zones and draggable labels.

use mechanics_content::BiomesBoard;
use mechanics_content::biomes::{BIOMES, ZONES, biome};
use mechanics_core::{Payload, SlotId};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::hits::{HitMap, HitTarget, region};
use crate::presentation::theme::Theme;

use super::{drag_proxy, feedback_line};

const ZONE_WIDTH: u16 = 18;
const ZONE_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect, board: &mut BiomesBoard, hits: &mut HitMap) {
    let [title_area, map_area, bank_area, feedback_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(12),
        Constraint::Length(4),
        Constraint::Length(2),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Arraste cada bioma para sua região no mapa",
            Theme::title(),
        )),
        title_area,
    );

    render_map(frame, map_area, board);
    render_bank(frame, bank_area, board, hits);
    feedback_line(
        frame,
        feedback_area,
        board.session.feedback(),
        "Cada região só aceita o bioma correto.",
    );

    if let Some((payload, at)) = board.session.drag_proxy() {
        drag_proxy(frame, &proxy_label(payload), at.x, at.y);
    }
}

fn render_map(frame: &mut Frame, area: Rect, board: &mut BiomesBoard) {
    let mut targets = Vec::new();
    for (entry, (top, left)) in BIOMES.iter().zip(ZONES) {
        let x = area.x + (u32::from(area.width) * u32::from(left) / 100) as u16;
        let y = area.y + (u32::from(area.height) * u32::from(top) / 100) as u16;
        let zone_area = Rect {
            x: x.min(area.right().saturating_sub(ZONE_WIDTH)),
            y: y.min(area.bottom().saturating_sub(ZONE_HEIGHT)),
            width: ZONE_WIDTH,
            height: ZONE_HEIGHT,
        };

        let placed = board.is_placed(entry.id);
        let (border_style, label) = if placed {
            let (r, g, b) = entry.color;
            (Style::default().fg(Color::Rgb(r, g, b)), entry.name)
        } else {
            (Theme::slot_empty(), "?")
        };
        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(zone_area);
        frame.render_widget(block, zone_area);
        frame.render_widget(
            Paragraph::new(Line::styled(label, border_style)).centered(),
            inner,
        );

        targets.push((SlotId(entry.id), region(zone_area)));
    }
    board.set_targets(targets);
}

fn render_bank(frame: &mut Frame, area: Rect, board: &BiomesBoard, hits: &mut HitMap) {
    let mut x = area.x;
    let mut y = area.y;
    for entry in BIOMES {
        let label = format!(" {} ", entry.name);
        let width = label.chars().count() as u16;
        if x + width > area.right() {
            x = area.x;
            y += 2;
        }
        if y >= area.bottom() {
            break;
        }
        let chip_area = Rect { x, y, width, height: 1 };

        let placed = board.is_placed(entry.id);
        let style = if placed { Theme::chip_used() } else { Theme::chip() };
        frame.render_widget(Paragraph::new(Line::styled(label, style)), chip_area);
        if !placed {
            hits.push(chip_area, HitTarget::Chip(Payload::Label(entry.id)));
        }
        x += width + 1;
    }
}

fn proxy_label(payload: Payload) -> String {
    match payload {
        Payload::Label(id) => biome(id)
            .map(|b| format!(" {} ", b.name))
            .unwrap_or_else(|| format!(" {id} ")),
        Payload::Number(n) => format!(" {n} "),
    }
}
