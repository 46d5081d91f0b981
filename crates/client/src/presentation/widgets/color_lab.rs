//! Color mixing lab canvas: channel sliders and a live preview swatch.

use mechanics_content::ColorLab;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::hits::{HitMap, HitTarget, UiButton};
use crate::presentation::theme::Theme;

use super::{button, feedback_line};

pub fn render(frame: &mut Frame, area: Rect, lab: &mut ColorLab, hits: &mut HitMap) {
    let [title_area, mode_area, sliders_area, preview_area, actions_area, feedback_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "Misture os canais até obter uma cor análoga ao vermelho",
            Theme::title(),
        )),
        title_area,
    );

    let mode_label = format!("Modo: {} [m]", lab.mode());
    let mode_rect = Rect { width: (mode_label.len() as u16 + 2).min(mode_area.width), ..mode_area };
    button(frame, mode_rect, &mode_label, UiButton::ToggleVariant, hits);

    render_sliders(frame, sliders_area, lab, hits);
    render_preview(frame, preview_area, lab);

    let deliver_rect = Rect { width: 20.min(actions_area.width), ..actions_area };
    if !lab.is_delivered() {
        button(frame, deliver_rect, "Entregar cor [Enter]", UiButton::Deliver, hits);
    }

    feedback_line(
        frame,
        feedback_area,
        lab.feedback(),
        "Ajuste os canais e entregue a cor.",
    );
}

fn render_sliders(frame: &mut Frame, area: Rect, lab: &ColorLab, hits: &mut HitMap) {
    let track_width = area.width.saturating_sub(18);
    if track_width < 2 {
        return;
    }

    for idx in 0..lab.channel_count() {
        let y = area.y + idx as u16 * 2;
        if y >= area.bottom() {
            break;
        }

        let value = lab.channel_value(idx);
        let max = lab.channel_max();
        let filled = (u32::from(track_width) * u32::from(value) / u32::from(max.max(1))) as u16;

        let label_style = if idx == lab.cursor() {
            Theme::slot_filled()
        } else {
            Theme::hint()
        };
        let label = format!("{:<9} {:>3}", lab.channel_label(idx), value);
        frame
            .buffer_mut()
            .set_stringn(area.x, y, &label, 14, label_style);

        let track = Rect { x: area.x + 15, y, width: track_width, height: 1 };
        let bar: String = (0..track_width)
            .map(|i| if i < filled { '█' } else { '░' })
            .collect();
        frame
            .buffer_mut()
            .set_string(track.x, track.y, &bar, label_style);
        hits.push(track, HitTarget::Slider(idx));
    }
}

fn render_preview(frame: &mut Frame, area: Rect, lab: &ColorLab) {
    let (r, g, b) = lab.mixed_rgb();
    let swatch = Block::default().style(Style::default().bg(Color::Rgb(r, g, b)));
    let [swatch_area, label_area] =
        Layout::horizontal([Constraint::Length(16), Constraint::Min(10)]).areas(area);
    frame.render_widget(swatch, swatch_area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::raw(""),
            Line::styled(format!(" rgb({r}, {g}, {b})"), Theme::hint()),
        ]),
        label_area,
    );
}
