//! Per-mechanic session state machine.
//!
//! A [`SlotSession`] owns everything one slot-based mechanic needs at
//! runtime: the placement state, the drag engine, the validation rule and
//! its policy, the current feedback, and the pending auto-clear deadline.
//! The event loop forwards pointer events and clock ticks; rendering reads
//! the session and registers drop targets back into it each frame.

use std::time::Instant;

use crate::drag::{DragEngine, DragEvent, DragPhase, Point, Region};
use crate::feedback::{Feedback, Verdict};
use crate::placement::{Payload, PlacementDelta, PlacementState, SlotId};
use crate::rule::{ErrorPolicy, EvalTrigger, Rule, SessionConfig};

pub struct SlotSession {
    placement: PlacementState,
    drag: DragEngine,
    rule: Box<dyn Rule>,
    config: SessionConfig,
    feedback: Option<Feedback>,
    locked: bool,
    clear_at: Option<Instant>,
}

impl SlotSession {
    pub fn new(placement: PlacementState, rule: Box<dyn Rule>, config: SessionConfig) -> Self {
        Self {
            placement,
            drag: DragEngine::new(),
            rule,
            config,
            feedback: None,
            locked: false,
            clear_at: None,
        }
    }

    pub fn placements(&self) -> &PlacementState {
        &self.placement
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    pub fn drag_proxy(&self) -> Option<(Payload, Point)> {
        self.drag.drag_proxy()
    }

    /// Registers this frame's drop target regions.
    pub fn set_targets(&mut self, targets: Vec<(SlotId, Region)>) {
        self.drag.set_targets(targets);
    }

    /// Overrides the delay of a timed error policy. Sticky stays sticky.
    pub fn set_error_delay(&mut self, delay: std::time::Duration) {
        self.config.error_policy = match self.config.error_policy {
            ErrorPolicy::AutoClear(_) => ErrorPolicy::AutoClear(delay),
            ErrorPolicy::AutoDismiss(_) => ErrorPolicy::AutoDismiss(delay),
            ErrorPolicy::Sticky => ErrorPolicy::Sticky,
        };
    }

    /// Earliest instant at which [`tick`](Self::tick) will have work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.clear_at
    }

    /// Starts a drag gesture. Ignored while the session is locked after a
    /// success.
    pub fn pointer_down(&mut self, payload: Payload, at: Point, now: Instant) {
        if self.locked {
            return;
        }
        self.begin_interaction(now);
        self.drag.pointer_down(payload, at);
    }

    pub fn pointer_move(&mut self, at: Point) {
        self.drag.pointer_move(at);
    }

    /// Ends the gesture and commits the drop when it hit an accepting slot.
    /// A release outside every target leaves all state untouched.
    pub fn pointer_up(&mut self, at: Point, now: Instant) -> Option<PlacementDelta> {
        match self.drag.pointer_up(at)? {
            DragEvent::GestureEnd { payload, drop: Some(slot) } => {
                if let Some(accept) = self.config.acceptance
                    && !accept(slot, &payload)
                {
                    return None;
                }
                self.commit(slot, payload, now)
            }
            _ => None,
        }
    }

    /// Places without a gesture, for keyboard-driven interactions. Goes
    /// through the same commit path as a drop.
    pub fn place_direct(&mut self, slot: SlotId, payload: Payload, now: Instant) -> Option<PlacementDelta> {
        if self.locked {
            return None;
        }
        self.begin_interaction(now);
        if let Some(accept) = self.config.acceptance
            && !accept(slot, &payload)
        {
            return None;
        }
        self.commit(slot, payload, now)
    }

    /// Explicit validation request. Unlike the placement trigger this also
    /// surfaces `Incomplete` so the player sees why nothing was judged.
    pub fn check(&mut self, now: Instant) {
        if self.locked {
            return;
        }
        let feedback = self.rule.evaluate(&self.placement);
        self.apply_verdict(feedback, now, true);
    }

    /// Advances timers. Returns `true` when the pending auto-clear fired
    /// and the view should redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(at) if now >= at => {
                self.fire_clear();
                true
            }
            _ => false,
        }
    }

    /// Returns the mechanic to its initial state: placements, feedback,
    /// lock, pending timer, and any gesture in flight.
    pub fn reset(&mut self) {
        self.drag.cancel();
        self.placement.clear_all();
        self.feedback = None;
        self.locked = false;
        self.clear_at = None;
    }

    fn commit(&mut self, slot: SlotId, payload: Payload, now: Instant) -> Option<PlacementDelta> {
        let delta = self.placement.place(slot, payload).ok()?;
        if self.config.trigger == EvalTrigger::OnPlacement {
            let feedback = self.rule.evaluate(&self.placement);
            self.apply_verdict(feedback, now, false);
        }
        Some(delta)
    }

    fn apply_verdict(&mut self, feedback: Feedback, now: Instant, show_incomplete: bool) {
        match feedback.verdict {
            Verdict::Success => {
                self.locked = true;
                self.clear_at = None;
                self.feedback = Some(feedback);
            }
            Verdict::Error => {
                self.clear_at = match self.config.error_policy {
                    ErrorPolicy::AutoClear(delay) | ErrorPolicy::AutoDismiss(delay) => {
                        Some(now + delay)
                    }
                    ErrorPolicy::Sticky => None,
                };
                self.feedback = Some(feedback);
            }
            Verdict::Incomplete => {
                self.feedback = show_incomplete.then_some(feedback);
            }
        }
    }

    /// A new interaction while an error is pending fires the clear at once
    /// instead of letting stale feedback linger under the gesture.
    fn begin_interaction(&mut self, _now: Instant) {
        if self.clear_at.take().is_some() {
            self.fire_clear();
        } else if self.feedback.as_ref().is_some_and(Feedback::is_error) {
            self.feedback = None;
        }
    }

    fn fire_clear(&mut self) {
        if matches!(self.config.error_policy, ErrorPolicy::AutoClear(_)) {
            self.placement.clear_all();
        }
        self.feedback = None;
        self.clear_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::rule::DEFAULT_ERROR_CLEAR;

    const T1: SlotId = SlotId("t1");
    const T2: SlotId = SlotId("t2");

    /// t1 + t2 must equal 6.
    fn sum_rule(placements: &PlacementState) -> Feedback {
        let (a, b) = (placements.get(T1), placements.get(T2));
        match (a, b) {
            (Some(Payload::Number(a)), Some(Payload::Number(b))) => {
                if a + b == 6 {
                    Feedback::success()
                } else {
                    Feedback::error()
                }
            }
            _ => Feedback::incomplete(),
        }
    }

    fn session() -> SlotSession {
        SlotSession::new(
            PlacementState::new([T1, T2]),
            Box::new(sum_rule),
            SessionConfig::on_placement(),
        )
    }

    fn targets() -> Vec<(SlotId, Region)> {
        vec![
            (T1, Region { x: 0, y: 0, width: 5, height: 1 }),
            (T2, Region { x: 5, y: 0, width: 5, height: 1 }),
        ]
    }

    fn drop_number(s: &mut SlotSession, n: i64, at: Point, now: Instant) {
        s.pointer_down(Payload::Number(n), Point { x: 0, y: 9 }, now);
        s.pointer_move(at);
        s.pointer_up(at, now);
    }

    #[test]
    fn correct_pair_locks_the_session() {
        let mut s = session();
        s.set_targets(targets());
        let now = Instant::now();

        drop_number(&mut s, 1, Point { x: 1, y: 0 }, now);
        assert!(s.feedback().is_none(), "incomplete is suppressed on placement");

        drop_number(&mut s, 5, Point { x: 6, y: 0 }, now);
        assert!(s.feedback().is_some_and(Feedback::is_success));
        assert!(s.is_locked());

        // Locked sessions ignore further input.
        drop_number(&mut s, 3, Point { x: 1, y: 0 }, now);
        assert_eq!(s.placements().get(T1), Some(Payload::Number(1)));
    }

    #[test]
    fn wrong_pair_schedules_an_auto_clear() {
        let mut s = session();
        s.set_targets(targets());
        let now = Instant::now();

        drop_number(&mut s, 1, Point { x: 1, y: 0 }, now);
        drop_number(&mut s, 2, Point { x: 6, y: 0 }, now);
        assert!(s.feedback().is_some_and(Feedback::is_error));
        assert_eq!(s.next_deadline(), Some(now + DEFAULT_ERROR_CLEAR));

        assert!(!s.tick(now + Duration::from_millis(100)));
        assert!(s.tick(now + DEFAULT_ERROR_CLEAR));
        assert!(s.feedback().is_none());
        assert_eq!(s.placements().get(T1), None);
        assert_eq!(s.placements().get(T2), None);
        assert!(s.next_deadline().is_none());
    }

    #[test]
    fn new_gesture_fires_the_pending_clear_immediately() {
        let mut s = session();
        s.set_targets(targets());
        let now = Instant::now();

        drop_number(&mut s, 1, Point { x: 1, y: 0 }, now);
        drop_number(&mut s, 2, Point { x: 6, y: 0 }, now);
        assert!(s.next_deadline().is_some());

        s.pointer_down(Payload::Number(5), Point { x: 0, y: 9 }, now);
        assert!(s.feedback().is_none());
        assert!(s.next_deadline().is_none());
        assert_eq!(s.placements().get(T1), None, "pending clear wiped placements");
    }

    #[test]
    fn release_outside_targets_changes_nothing() {
        let mut s = session();
        s.set_targets(targets());
        let now = Instant::now();

        s.pointer_down(Payload::Number(1), Point { x: 0, y: 9 }, now);
        let delta = s.pointer_up(Point { x: 40, y: 40 }, now);
        assert_eq!(delta, None);
        assert!(s.placements().iter().all(|(_, p)| p.is_none()));
        assert!(s.feedback().is_none());
        assert_eq!(s.drag_phase(), DragPhase::Idle);
    }

    #[test]
    fn auto_dismiss_keeps_placements() {
        let mut s = SlotSession::new(
            PlacementState::new([T1, T2]),
            Box::new(sum_rule),
            SessionConfig::on_placement()
                .with_error_policy(ErrorPolicy::AutoDismiss(Duration::from_millis(500))),
        );
        s.set_targets(targets());
        let now = Instant::now();

        drop_number(&mut s, 1, Point { x: 1, y: 0 }, now);
        drop_number(&mut s, 2, Point { x: 6, y: 0 }, now);
        assert!(s.feedback().is_some_and(Feedback::is_error));

        assert!(s.tick(now + Duration::from_millis(500)));
        assert!(s.feedback().is_none());
        assert_eq!(s.placements().get(T1), Some(Payload::Number(1)));
        assert_eq!(s.placements().get(T2), Some(Payload::Number(2)));
    }

    #[test]
    fn manual_trigger_only_evaluates_on_check() {
        let mut s = SlotSession::new(
            PlacementState::new([T1, T2]),
            Box::new(sum_rule),
            SessionConfig::manual(),
        );
        s.set_targets(targets());
        let now = Instant::now();

        drop_number(&mut s, 1, Point { x: 1, y: 0 }, now);
        drop_number(&mut s, 5, Point { x: 6, y: 0 }, now);
        assert!(s.feedback().is_none());

        s.check(now);
        assert!(s.feedback().is_some_and(Feedback::is_success));
        assert!(s.is_locked());
    }

    #[test]
    fn manual_check_surfaces_incomplete() {
        let mut s = SlotSession::new(
            PlacementState::new([T1, T2]),
            Box::new(sum_rule),
            SessionConfig::manual(),
        );
        let now = Instant::now();
        s.check(now);
        assert_eq!(s.feedback().map(|f| f.verdict), Some(Verdict::Incomplete));
    }

    #[test]
    fn acceptance_predicate_gates_the_commit() {
        fn only_numbers(_: SlotId, payload: &Payload) -> bool {
            matches!(payload, Payload::Number(_))
        }
        let mut s = SlotSession::new(
            PlacementState::new([T1, T2]),
            Box::new(sum_rule),
            SessionConfig::on_placement().with_acceptance(only_numbers),
        );
        s.set_targets(targets());
        let now = Instant::now();

        s.pointer_down(Payload::Label("x"), Point { x: 0, y: 9 }, now);
        assert_eq!(s.pointer_up(Point { x: 1, y: 0 }, now), None);
        assert_eq!(s.placements().get(T1), None);

        assert!(s.place_direct(T1, Payload::Number(3), now).is_some());
    }

    #[test]
    fn reset_cancels_gesture_timer_and_lock() {
        let mut s = session();
        s.set_targets(targets());
        let now = Instant::now();

        drop_number(&mut s, 1, Point { x: 1, y: 0 }, now);
        drop_number(&mut s, 2, Point { x: 6, y: 0 }, now);
        s.pointer_down(Payload::Number(5), Point { x: 0, y: 9 }, now);
        s.reset();

        assert_eq!(s.drag_phase(), DragPhase::Idle);
        assert!(s.feedback().is_none());
        assert!(s.next_deadline().is_none());
        assert!(!s.is_locked());
        assert!(s.placements().iter().all(|(_, p)| p.is_none()));

        // The expired timer must not fire after a reset.
        assert!(!s.tick(now + Duration::from_secs(10)));
    }
}
