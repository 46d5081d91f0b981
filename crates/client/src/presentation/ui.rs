//! Top-level render dispatch.
//!
//! Every frame rebuilds the hit map from scratch, so what the pointer
//! handler resolves always matches what is on screen.

use mechanics_content::CATALOG;
use mechanics_core::filter;
use ratatui::Frame;

use crate::state::{AppMode, AppState};

use super::widgets::{gallery, playground};

pub fn render(frame: &mut Frame, state: &mut AppState) {
    let AppState {
        mode,
        filters,
        query,
        search_active,
        selected,
        hits,
        ..
    } = state;
    hits.clear();

    let area = frame.area();
    match mode {
        AppMode::Gallery => {
            let view = gallery::GalleryView {
                visible: filter(CATALOG, filters, query),
                filters: &*filters,
                query: query.as_str(),
                search_active: *search_active,
                selected: *selected,
            };
            gallery::render(frame, area, &view, hits);
        }
        AppMode::Playground(playground) => {
            playground::render(frame, area, playground, hits);
        }
    }
}
