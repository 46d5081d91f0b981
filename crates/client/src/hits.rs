//! Screen hit regions rebuilt on every render pass.
//!
//! Widgets register the rectangles of everything clickable; the pointer
//! handler resolves a mouse position against the map. Later registrations
//! win, so overlays naturally shadow what they cover.

use mechanics_content::PieceKind;
use mechanics_core::{Payload, Point, Region};
use ratatui::layout::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiButton {
    Close,
    Reset,
    Validate,
    Deliver,
    Combine,
    Retry,
    ToggleVariant,
    ClearFilters,
}

/// What a click at some cell means.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitTarget {
    /// Gallery card, indexed into the current visible list.
    Card(usize),
    SearchBox,
    SegmentFilter,
    DisciplineFilter,
    KindFilter,
    /// Drag source chip carrying its payload.
    Chip(Payload),
    /// Grid cell (basin board).
    Cell { row: usize, col: usize },
    /// Palette entry (basin board).
    Piece(PieceKind),
    /// Selectable option (quiz answers).
    Option(usize),
    /// Grouping chip by id.
    GroupChip(u32),
    /// Color lab slider row; the x offset inside the rect is the value.
    Slider(usize),
    Button(UiButton),
}

#[derive(Default)]
pub struct HitMap {
    entries: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn push(&mut self, rect: Rect, target: HitTarget) {
        self.entries.push((rect, target));
    }

    /// Topmost hit at the given cell: the last registered rect wins.
    pub fn hit(&self, x: u16, y: u16) -> Option<(Rect, HitTarget)> {
        self.entries
            .iter()
            .rev()
            .find(|(rect, _)| contains(*rect, x, y))
            .copied()
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Converts a layout rect into an engine drop region.
pub fn region(rect: Rect) -> Region {
    Region { x: rect.x, y: rect.y, width: rect.width, height: rect.height }
}

pub fn point(x: u16, y: u16) -> Point {
    Point { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_registrations_shadow_earlier_ones() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(0, 0, 10, 10), HitTarget::Card(0));
        hits.push(Rect::new(0, 0, 10, 10), HitTarget::Button(UiButton::Close));
        assert_eq!(
            hits.hit(5, 5).map(|(_, t)| t),
            Some(HitTarget::Button(UiButton::Close))
        );
    }

    #[test]
    fn misses_outside_every_rect() {
        let mut hits = HitMap::default();
        hits.push(Rect::new(2, 2, 3, 3), HitTarget::Card(1));
        assert_eq!(hits.hit(1, 1), None);
        assert_eq!(hits.hit(5, 2), None, "right edge is exclusive");
        assert!(hits.hit(4, 4).is_some());
    }
}
