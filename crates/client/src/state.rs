//! Application state shared between input handlers and the renderer.

use std::time::{Duration, Instant};

use mechanics_content::{CATALOG, Instance, build_registry};
use mechanics_core::{FilterState, MechanicDescriptor, Registry, filter};
use strum::IntoEnumIterator;

use crate::hits::HitMap;

/// Gallery grid columns; vertical navigation moves by a full row.
pub const GRID_COLUMNS: usize = 3;

/// A launched mechanic. `instance` is `None` for catalog entries without
/// a registered constructor; the canvas shows a placeholder panel instead.
pub struct PlaygroundState {
    pub descriptor: &'static MechanicDescriptor,
    pub instance: Option<Instance>,
    /// Free-form numeric entry, used by mechanics that ask for a typed
    /// answer (e.g. the grouping fallback question).
    pub input_buffer: String,
}

pub enum AppMode {
    Gallery,
    Playground(Box<PlaygroundState>),
}

pub struct AppState {
    pub mode: AppMode,
    pub filters: FilterState,
    pub query: String,
    pub search_active: bool,
    pub selected: usize,
    pub hits: HitMap,
    pub should_quit: bool,
    registry: Registry<Instance>,
    error_clear: Duration,
}

impl AppState {
    pub fn new(error_clear: Duration) -> Self {
        Self {
            mode: AppMode::Gallery,
            filters: FilterState::default(),
            query: String::new(),
            search_active: false,
            selected: 0,
            hits: HitMap::default(),
            should_quit: false,
            registry: build_registry(),
            error_clear,
        }
    }

    /// Catalog entries matching the current filters and search query.
    pub fn visible(&self) -> Vec<&'static MechanicDescriptor> {
        filter(CATALOG, &self.filters, &self.query)
    }

    pub fn clamp_selection(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let count = self.visible().len();
        if count == 0 {
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, count as isize - 1) as usize;
    }

    pub fn open_selected(&mut self) {
        self.open(self.selected);
    }

    /// Launches the mechanic at `index` in the visible list.
    pub fn open(&mut self, index: usize) {
        let Some(descriptor) = self.visible().get(index).copied() else {
            return;
        };
        self.selected = index;

        let mut instance = self.registry.instantiate(descriptor.id);
        match &mut instance {
            Some(instance) => {
                instance.set_error_delay(self.error_clear);
                tracing::info!("Launching mechanic: {}", descriptor.id);
            }
            None => tracing::warn!("No constructor registered for {}", descriptor.id),
        }

        self.mode = AppMode::Playground(Box::new(PlaygroundState {
            descriptor,
            instance,
            input_buffer: String::new(),
        }));
    }

    pub fn close_overlay(&mut self) {
        if let AppMode::Playground(playground) = &self.mode {
            tracing::info!("Closing mechanic: {}", playground.descriptor.id);
        }
        self.mode = AppMode::Gallery;
        self.clamp_selection();
    }

    pub fn cycle_segment(&mut self) {
        self.filters.segment = cycle(self.filters.segment);
        self.clamp_selection();
    }

    pub fn cycle_discipline(&mut self) {
        self.filters.discipline = cycle(self.filters.discipline);
        self.clamp_selection();
    }

    pub fn cycle_kind(&mut self) {
        self.filters.kind = cycle(self.filters.kind);
        self.clamp_selection();
    }

    pub fn clear_filters(&mut self) {
        self.filters.reset();
        self.query.clear();
        self.search_active = false;
        self.clamp_selection();
    }

    /// Earliest pending timer across the running mechanic, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.mode {
            AppMode::Playground(playground) => {
                playground.instance.as_ref().and_then(Instance::next_deadline)
            }
            AppMode::Gallery => None,
        }
    }

    /// Advances mechanic timers. Returns true when something changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &mut self.mode {
            AppMode::Playground(playground) => playground
                .instance
                .as_mut()
                .is_some_and(|instance| instance.tick(now)),
            AppMode::Gallery => false,
        }
    }
}

/// None -> first variant -> ... -> last variant -> None.
fn cycle<T: IntoEnumIterator + PartialEq + Copy>(current: Option<T>) -> Option<T> {
    match current {
        None => T::iter().next(),
        Some(value) => {
            let mut iter = T::iter();
            iter.find(|v| *v == value);
            iter.next()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechanics_core::{Discipline, Segment};

    #[test]
    fn cycling_a_filter_walks_all_variants_then_wraps() {
        let mut current: Option<Segment> = None;
        let mut seen = 0;
        loop {
            current = cycle(current);
            if current.is_none() {
                break;
            }
            seen += 1;
        }
        assert_eq!(seen, Segment::iter().count());
    }

    #[test]
    fn opening_a_card_enters_the_playground() {
        let mut state = AppState::new(Duration::from_millis(1500));
        state.open(0);
        match &state.mode {
            AppMode::Playground(playground) => {
                assert!(playground.instance.is_some());
            }
            AppMode::Gallery => panic!("expected playground mode"),
        }
        state.close_overlay();
        assert!(matches!(state.mode, AppMode::Gallery));
    }

    #[test]
    fn selection_is_clamped_when_filters_shrink_the_list() {
        let mut state = AppState::new(Duration::from_millis(1500));
        state.selected = CATALOG.len() - 1;
        state.filters.discipline = Some(Discipline::Matematica);
        state.clamp_selection();
        assert!(state.selected < state.visible().len());
    }

    #[test]
    fn move_selection_saturates_at_the_ends() {
        let mut state = AppState::new(Duration::from_millis(1500));
        state.move_selection(-1);
        assert_eq!(state.selected, 0);
        state.move_selection(isize::MAX / 2);
        assert_eq!(state.selected, state.visible().len() - 1);
    }
}
