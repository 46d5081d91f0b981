//! Panel for mechanics that live outside the terminal client.

use mechanics_content::ExternalPanel;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, panel: &ExternalPanel) {
    let lines = vec![
        Line::raw(""),
        Line::styled(panel.title, Theme::title()),
        Line::raw(""),
        Line::styled(
            "Esta mecânica roda como documento externo ao cliente.",
            Theme::hint(),
        ),
        Line::styled(format!("Documento: {}", panel.document), Theme::tag()),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), area);
}
