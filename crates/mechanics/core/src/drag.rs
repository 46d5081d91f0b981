//! Pointer-driven drag gesture engine.
//!
//! The engine is a small state machine fed by raw pointer transitions. It
//! knows nothing about rendering; the client registers drop target regions
//! each frame and forwards pointer events, and the engine answers with
//! gesture events the session layer interprets.

use crate::placement::{Payload, SlotId};

/// Terminal cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

/// Axis-aligned rectangle in terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// Current gesture phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging {
        payload: Payload,
        origin: Point,
        pointer: Point,
    },
}

/// Events emitted as a gesture progresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEvent {
    GestureStart {
        payload: Payload,
    },
    GestureMove {
        dx: i32,
        dy: i32,
    },
    /// Pointer released. `drop` is the hit drop target, or `None` when the
    /// release landed outside every registered region.
    GestureEnd {
        payload: Payload,
        drop: Option<SlotId>,
    },
}

/// Tracks one gesture at a time against a set of registered drop targets.
#[derive(Clone, Debug, Default)]
pub struct DragEngine {
    targets: Vec<(SlotId, Region)>,
    phase: DragPhase,
}

impl Default for DragPhase {
    fn default() -> Self {
        DragPhase::Idle
    }
}

impl DragEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the registered drop targets. Called once per render pass,
    /// after layout, so regions always match what is on screen.
    pub fn set_targets(&mut self, targets: Vec<(SlotId, Region)>) {
        self.targets = targets;
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Payload and pointer position while a gesture is live, for rendering
    /// the drag proxy.
    pub fn drag_proxy(&self) -> Option<(Payload, Point)> {
        match self.phase {
            DragPhase::Dragging { payload, pointer, .. } => Some((payload, pointer)),
            DragPhase::Idle => None,
        }
    }

    /// Begins a gesture. Ignored when one is already in flight, so stray
    /// press events cannot corrupt the phase.
    pub fn pointer_down(&mut self, payload: Payload, at: Point) -> Option<DragEvent> {
        match self.phase {
            DragPhase::Idle => {
                self.phase = DragPhase::Dragging { payload, origin: at, pointer: at };
                Some(DragEvent::GestureStart { payload })
            }
            DragPhase::Dragging { .. } => None,
        }
    }

    pub fn pointer_move(&mut self, at: Point) -> Option<DragEvent> {
        match &mut self.phase {
            DragPhase::Dragging { origin, pointer, .. } => {
                *pointer = at;
                Some(DragEvent::GestureMove {
                    dx: i32::from(at.x) - i32::from(origin.x),
                    dy: i32::from(at.y) - i32::from(origin.y),
                })
            }
            DragPhase::Idle => None,
        }
    }

    /// Ends the gesture, hit-testing the release point against the
    /// registered targets. When regions overlap the first registered one
    /// wins.
    pub fn pointer_up(&mut self, at: Point) -> Option<DragEvent> {
        match self.phase {
            DragPhase::Dragging { payload, .. } => {
                self.phase = DragPhase::Idle;
                let drop = self
                    .targets
                    .iter()
                    .find(|(_, region)| region.contains(at))
                    .map(|(slot, _)| *slot);
                Some(DragEvent::GestureEnd { payload, drop })
            }
            DragPhase::Idle => None,
        }
    }

    /// Abandons any gesture in flight without emitting an end event.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: SlotId = SlotId("a");
    const B: SlotId = SlotId("b");

    fn engine() -> DragEngine {
        let mut e = DragEngine::new();
        e.set_targets(vec![
            (A, Region { x: 0, y: 0, width: 10, height: 3 }),
            (B, Region { x: 10, y: 0, width: 10, height: 3 }),
        ]);
        e
    }

    #[test]
    fn full_gesture_reports_start_move_and_drop() {
        let mut e = engine();
        let start = e.pointer_down(Payload::Number(5), Point { x: 2, y: 10 });
        assert_eq!(start, Some(DragEvent::GestureStart { payload: Payload::Number(5) }));

        let moved = e.pointer_move(Point { x: 12, y: 1 });
        assert_eq!(moved, Some(DragEvent::GestureMove { dx: 10, dy: -9 }));

        let end = e.pointer_up(Point { x: 12, y: 1 });
        assert_eq!(
            end,
            Some(DragEvent::GestureEnd { payload: Payload::Number(5), drop: Some(B) })
        );
        assert_eq!(e.phase(), DragPhase::Idle);
    }

    #[test]
    fn release_outside_every_region_reports_no_drop() {
        let mut e = engine();
        e.pointer_down(Payload::Number(5), Point { x: 2, y: 10 });
        let end = e.pointer_up(Point { x: 50, y: 50 });
        assert_eq!(end, Some(DragEvent::GestureEnd { payload: Payload::Number(5), drop: None }));
    }

    #[test]
    fn overlapping_regions_resolve_to_the_first_registered() {
        let mut e = DragEngine::new();
        e.set_targets(vec![
            (A, Region { x: 0, y: 0, width: 20, height: 3 }),
            (B, Region { x: 0, y: 0, width: 20, height: 3 }),
        ]);
        e.pointer_down(Payload::Label("x"), Point { x: 0, y: 5 });
        let end = e.pointer_up(Point { x: 5, y: 1 });
        assert_eq!(end, Some(DragEvent::GestureEnd { payload: Payload::Label("x"), drop: Some(A) }));
    }

    #[test]
    fn second_press_during_a_gesture_is_ignored() {
        let mut e = engine();
        e.pointer_down(Payload::Number(1), Point { x: 0, y: 0 });
        assert_eq!(e.pointer_down(Payload::Number(2), Point { x: 1, y: 1 }), None);
        match e.phase() {
            DragPhase::Dragging { payload, .. } => assert_eq!(payload, Payload::Number(1)),
            DragPhase::Idle => panic!("gesture dropped"),
        }
    }

    #[test]
    fn move_and_release_while_idle_do_nothing() {
        let mut e = engine();
        assert_eq!(e.pointer_move(Point { x: 1, y: 1 }), None);
        assert_eq!(e.pointer_up(Point { x: 1, y: 1 }), None);
    }

    #[test]
    fn cancel_discards_the_gesture_silently() {
        let mut e = engine();
        e.pointer_down(Payload::Number(1), Point { x: 0, y: 0 });
        e.cancel();
        assert_eq!(e.phase(), DragPhase::Idle);
        assert_eq!(e.pointer_up(Point { x: 1, y: 1 }), None);
    }
}
