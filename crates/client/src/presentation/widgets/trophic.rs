//! Trophic chain canvas: the energy rail and the organism bank.

use mechanics_content::TrophicRail;
use mechanics_content::trophic::{ORGANISMS, organism};
use mechanics_core::Payload;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::hits::{HitMap, HitTarget, UiButton, region};
use crate::presentation::theme::Theme;

use super::{button, drag_proxy, feedback_line, slot_box};

const SLOT_WIDTH: u16 = 14;
const SLOT_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, rail: &mut TrophicRail, hits: &mut HitMap) {
    let [title_area, rail_area, bank_area, actions_area, feedback_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(SLOT_HEIGHT + 1),
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(area);

    let goal_level = if rail.level() == 1 { 3 } else { 4 };
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("Leve a Onça ao {goal_level}º nível trófico"),
            Theme::title(),
        )),
        title_area,
    );

    render_rail(frame, rail_area, rail);
    render_bank(frame, bank_area, rail, hits);

    let [validate_area, level_area] =
        Layout::horizontal([Constraint::Length(14), Constraint::Length(14)]).areas(actions_area);
    button(frame, validate_area, "Validar [v]", UiButton::Validate, hits);
    let level_label = if rail.level() == 1 { "4º nível [m]" } else { "3º nível [m]" };
    button(frame, level_area, level_label, UiButton::ToggleVariant, hits);

    feedback_line(
        frame,
        feedback_area,
        rail.session.feedback(),
        "Arraste os organismos para a cadeia e valide.",
    );

    if let Some((payload, at)) = rail.session.drag_proxy() {
        drag_proxy(frame, &proxy_label(payload), at.x, at.y);
    }
}

fn render_rail(frame: &mut Frame, area: Rect, rail: &mut TrophicRail) {
    let mut targets = Vec::new();
    for (idx, slot) in rail.slots().iter().enumerate() {
        let slot_area = Rect {
            x: area.x + idx as u16 * (SLOT_WIDTH + 2),
            y: area.y,
            width: SLOT_WIDTH,
            height: SLOT_HEIGHT,
        };
        if slot_area.right() > area.right() {
            break;
        }

        let content = rail.session.placements().get(*slot).map(|payload| match payload {
            Payload::Label(id) => organism(id)
                .map(|o| format!("{} {}", o.icon, o.name))
                .unwrap_or_else(|| id.to_string()),
            Payload::Number(n) => n.to_string(),
        });
        slot_box(frame, slot_area, content);

        // The energy slot is fixed; everything after it takes drops.
        if idx > 0 {
            targets.push((*slot, region(slot_area)));
        }
    }
    rail.set_targets(targets);
}

fn render_bank(frame: &mut Frame, area: Rect, rail: &TrophicRail, hits: &mut HitMap) {
    let mut x = area.x;
    let mut y = area.y;
    for org in ORGANISMS.iter().filter(|o| o.id != "sun") {
        let label = format!(" {} {} ({}) ", org.icon, org.name, org.role);
        let width = label.chars().count() as u16;
        if x + width > area.right() {
            x = area.x;
            y += 2;
        }
        if y >= area.bottom() {
            break;
        }
        let chip_area = Rect { x, y, width: width.min(area.width), height: 1 };

        frame.render_widget(Paragraph::new(Line::styled(label, Theme::chip())), chip_area);
        hits.push(chip_area, HitTarget::Chip(Payload::Label(org.id)));
        x += width + 1;
    }
}

fn proxy_label(payload: Payload) -> String {
    match payload {
        Payload::Label(id) => organism(id)
            .map(|o| format!(" {} {} ", o.icon, o.name))
            .unwrap_or_else(|| format!(" {id} ")),
        Payload::Number(n) => format!(" {n} "),
    }
}
