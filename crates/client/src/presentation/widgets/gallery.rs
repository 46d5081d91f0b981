//! Catalog gallery: search, filters, and the card grid.

use mechanics_core::{FilterState, MechanicDescriptor};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::hits::{HitMap, HitTarget, UiButton};
use crate::presentation::theme::Theme;
use crate::state::GRID_COLUMNS;

use super::button;

const CARD_HEIGHT: u16 = 6;

pub struct GalleryView<'a> {
    pub visible: Vec<&'static MechanicDescriptor>,
    pub filters: &'a FilterState,
    pub query: &'a str,
    pub search_active: bool,
    pub selected: usize,
}

pub fn render(frame: &mut Frame, area: Rect, view: &GalleryView, hits: &mut HitMap) {
    let [header, filter_bar, cards, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, view, hits);
    render_filter_bar(frame, filter_bar, view.filters, hits);

    if view.visible.is_empty() {
        render_empty(frame, cards);
    } else {
        render_cards(frame, cards, view, hits);
    }

    let hint = "↑↓←→ navegar | Enter abrir | / buscar | s/d/t filtros | c limpar | q sair";
    frame.render_widget(Paragraph::new(Line::styled(hint, Theme::hint())), footer);
}

fn render_header(frame: &mut Frame, area: Rect, view: &GalleryView, hits: &mut HitMap) {
    let [title_area, search_area] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(36)]).areas(area);

    let title = Paragraph::new(vec![
        Line::styled("Portal de Mecânicas", Theme::title()),
        Line::styled("Catálogo de jogos educacionais interativos", Theme::hint()),
    ]);
    frame.render_widget(title, title_area);

    let search_style = if view.search_active {
        Theme::card_selected()
    } else {
        Theme::card()
    };
    let search = Paragraph::new(format!("Buscar: {}", view.query)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_style),
    );
    frame.render_widget(search, search_area);
    hits.push(search_area, HitTarget::SearchBox);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, filters: &FilterState, hits: &mut HitMap) {
    let segment = filter_label("Segmento", filters.segment.map(|s| s.to_string()));
    let discipline = filter_label("Disciplina", filters.discipline.map(|d| d.to_string()));
    let kind = filter_label("Tipo", filters.kind.map(|k| k.to_string()));

    let widths = [
        segment.chars().count() as u16,
        discipline.chars().count() as u16,
        kind.chars().count() as u16,
    ];
    let [seg_area, _, dis_area, _, kind_area, _, clear_area] = Layout::horizontal([
        Constraint::Length(widths[0]),
        Constraint::Length(2),
        Constraint::Length(widths[1]),
        Constraint::Length(2),
        Constraint::Length(widths[2]),
        Constraint::Length(2),
        Constraint::Min(10),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(Line::styled(segment, Theme::tag())), seg_area);
    frame.render_widget(Paragraph::new(Line::styled(discipline, Theme::tag())), dis_area);
    frame.render_widget(Paragraph::new(Line::styled(kind, Theme::tag())), kind_area);
    hits.push(seg_area, HitTarget::SegmentFilter);
    hits.push(dis_area, HitTarget::DisciplineFilter);
    hits.push(kind_area, HitTarget::KindFilter);

    if !filters.is_default() {
        let clear = Rect { width: clear_area.width.min(12), ..clear_area };
        button(frame, clear, "Limpar [c]", UiButton::ClearFilters, hits);
    }
}

fn filter_label(name: &str, value: Option<String>) -> String {
    match value {
        Some(value) => format!("{name}: {value}"),
        None => format!("{name}: todos"),
    }
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::styled("Nenhuma mecânica encontrada", Theme::title()),
        Line::styled(
            "Ajuste os filtros ou limpe a busca para ver o catálogo.",
            Theme::hint(),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), area);
}

fn render_cards(frame: &mut Frame, area: Rect, view: &GalleryView, hits: &mut HitMap) {
    let rows = view.visible.len().div_ceil(GRID_COLUMNS);
    let visible_rows = usize::from(area.height / CARD_HEIGHT).max(1);

    // Keep the selected card on screen.
    let selected_row = view.selected / GRID_COLUMNS;
    let first_row = selected_row.saturating_sub(visible_rows.saturating_sub(1));

    for row in first_row..rows.min(first_row + visible_rows) {
        for col in 0..GRID_COLUMNS {
            let index = row * GRID_COLUMNS + col;
            let Some(descriptor) = view.visible.get(index) else {
                continue;
            };
            let card_width = area.width / GRID_COLUMNS as u16;
            let card_area = Rect {
                x: area.x + col as u16 * card_width,
                y: area.y + (row - first_row) as u16 * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            };
            render_card(frame, card_area, descriptor, index == view.selected);
            hits.push(card_area, HitTarget::Card(index));
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, descriptor: &MechanicDescriptor, selected: bool) {
    let border_style = if selected {
        Theme::card_selected()
    } else {
        Theme::card()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(descriptor.title, Theme::title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let segments = descriptor
        .segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let lines = vec![
        Line::styled(
            format!("{} • {}", descriptor.discipline, descriptor.kind),
            Theme::tag(),
        ),
        Line::styled(segments, Theme::hint()),
        Line::raw(descriptor.description),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
