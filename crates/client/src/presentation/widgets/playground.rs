//! Playground overlay: mechanic sidebar plus the interactive canvas.

use mechanics_content::Instance;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::hits::{HitMap, UiButton};
use crate::presentation::theme::Theme;
use crate::state::PlaygroundState;

use super::{
    basin, biomes, button, color_lab, crossword, equation, external, grouping, quest, quiz,
    trophic,
};

pub fn render(frame: &mut Frame, area: Rect, playground: &mut PlaygroundState, hits: &mut HitMap) {
    let [sidebar, canvas] =
        Layout::horizontal([Constraint::Length(32), Constraint::Min(20)]).areas(area);

    render_sidebar(frame, sidebar, playground, hits);

    let block = Block::default().borders(Borders::ALL).border_style(Theme::card());
    let inner = block.inner(canvas);
    frame.render_widget(block, canvas);

    match &mut playground.instance {
        Some(Instance::Equation(board)) => equation::render(frame, inner, board, hits),
        Some(Instance::Crossword(board)) => crossword::render(frame, inner, board, hits),
        Some(Instance::Quest(stage)) => quest::render(frame, inner, stage, hits),
        Some(Instance::ColorLab(lab)) => color_lab::render(frame, inner, lab, hits),
        Some(Instance::Basin(board)) => basin::render(frame, inner, board, hits),
        Some(Instance::Trophic(rail)) => trophic::render(frame, inner, rail, hits),
        Some(Instance::Biomes(board)) => biomes::render(frame, inner, board, hits),
        Some(Instance::Quiz(board)) => quiz::render(frame, inner, board, hits),
        Some(Instance::Grouping(board)) => {
            grouping::render(frame, inner, board, &playground.input_buffer, hits)
        }
        Some(Instance::External(panel)) => external::render(frame, inner, panel),
        None => render_placeholder(frame, inner),
    }
}

fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    playground: &PlaygroundState,
    hits: &mut HitMap,
) {
    let descriptor = playground.descriptor;
    let block = Block::default().borders(Borders::ALL).border_style(Theme::card());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [info, buttons] =
        Layout::vertical([Constraint::Min(5), Constraint::Length(3)]).areas(inner);

    let segments = descriptor
        .segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let lines = vec![
        Line::styled(descriptor.title, Theme::title()),
        Line::styled(
            format!("{} • {}", descriptor.discipline, descriptor.kind),
            Theme::tag(),
        ),
        Line::styled(segments, Theme::hint()),
        Line::styled(descriptor.years.join(" | "), Theme::hint()),
        Line::raw(""),
        Line::raw(descriptor.description),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), info);

    let [close_area, reset_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(buttons);
    button(frame, close_area, "Fechar [Esc]", UiButton::Close, hits);
    button(frame, reset_area, "Reiniciar [r]", UiButton::Reset, hits);
    frame.render_widget(
        Paragraph::new(Line::styled(canvas_hint(playground), Theme::hint())),
        hint_area,
    );
}

fn canvas_hint(playground: &PlaygroundState) -> &'static str {
    match &playground.instance {
        Some(Instance::ColorLab(_)) => "↑↓ canal | ←→ ajustar | m modo",
        Some(Instance::Basin(_)) => "1-5 peça | clique coloca | m fase",
        Some(Instance::Trophic(_)) => "arraste | v validar | m nível",
        Some(Instance::Crossword(_)) => "arraste | v verificar",
        Some(Instance::Quiz(_)) => "1-4 responder",
        Some(Instance::Grouping(_)) => "clique seleciona | Enter agrupar",
        _ => "use o mouse para interagir",
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::styled("Módulo de demonstração em desenvolvimento", Theme::title()),
        Line::styled("Este item do catálogo ainda não tem um demo jogável.", Theme::hint()),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), area);
}
