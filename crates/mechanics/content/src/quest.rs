//! English Quest: complete the sentence to let the character cross.
//!
//! Two obstacle phases. A wrong word shows a timed message but stays in
//! the slot; the right word starts a crossing animation window, after
//! which the stage advances (or completes on the last phase).

use std::time::{Duration, Instant};

use mechanics_core::{
    ErrorPolicy, Feedback, Payload, PlacementState, Point, Region, SessionConfig, SlotId,
    SlotSession, Verdict,
};

pub const ANSWER: SlotId = SlotId("answer");

/// How long the wrong-word message stays up.
const WRONG_WORD_DISMISS: Duration = Duration::from_millis(2000);
/// Delay from the correct drop until the stage advances.
const CROSSING: Duration = Duration::from_millis(2000);

pub struct QuestPhase {
    pub sentence_before: &'static str,
    pub sentence_after: &'static str,
    pub obstacle: &'static str,
    pub options: &'static [&'static str],
    pub correct: &'static str,
}

pub const PHASES: &[QuestPhase] = &[
    QuestPhase {
        sentence_before: "The door is ",
        sentence_after: "",
        obstacle: "door",
        options: &["pink", "open", "sticky"],
        correct: "open",
    },
    QuestPhase {
        sentence_before: "The bridge is ",
        sentence_after: "",
        obstacle: "bridge",
        options: &["wide", "small", "long"],
        correct: "long",
    },
];

fn phase_rule(correct: &'static str) -> impl Fn(&PlacementState) -> Feedback + Send {
    move |placements| match placements.get(ANSWER) {
        Some(Payload::Label(word)) if word == correct => {
            Feedback::success().with_message("Correct! Passing...")
        }
        Some(Payload::Label(word)) => {
            Feedback::error().with_message(format!("It's {word}, but not what we need."))
        }
        _ => Feedback::incomplete(),
    }
}

fn phase_session(phase: &QuestPhase) -> SlotSession {
    SlotSession::new(
        PlacementState::new([ANSWER]).with_unlimited_supply(),
        Box::new(phase_rule(phase.correct)),
        SessionConfig::on_placement()
            .with_error_policy(ErrorPolicy::AutoDismiss(WRONG_WORD_DISMISS)),
    )
}

pub struct QuestStage {
    session: SlotSession,
    phase: usize,
    advance_at: Option<Instant>,
    completed: bool,
}

impl QuestStage {
    pub fn new() -> Self {
        Self {
            session: phase_session(&PHASES[0]),
            phase: 0,
            advance_at: None,
            completed: false,
        }
    }

    pub fn phase(&self) -> &'static QuestPhase {
        &PHASES[self.phase]
    }

    pub fn phase_index(&self) -> usize {
        self.phase
    }

    pub fn is_crossing(&self) -> bool {
        self.advance_at.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        if self.completed {
            return None;
        }
        self.session.feedback()
    }

    pub fn filled_word(&self) -> Option<Payload> {
        self.session.placements().get(ANSWER)
    }

    pub fn drag_proxy(&self) -> Option<(Payload, Point)> {
        self.session.drag_proxy()
    }

    pub fn set_targets(&mut self, targets: Vec<(SlotId, Region)>) {
        self.session.set_targets(targets);
    }

    pub fn pointer_down(&mut self, payload: Payload, at: Point, now: Instant) {
        if self.advance_at.is_some() || self.completed {
            return;
        }
        self.session.pointer_down(payload, at, now);
    }

    pub fn pointer_move(&mut self, at: Point) {
        self.session.pointer_move(at);
    }

    pub fn pointer_up(&mut self, at: Point, now: Instant) {
        self.session.pointer_up(at, now);
        if self.session.feedback().is_some_and(Feedback::is_success) && self.advance_at.is_none() {
            self.advance_at = Some(now + CROSSING);
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(at) = self.advance_at
            && now >= at
        {
            self.advance_at = None;
            if self.phase + 1 < PHASES.len() {
                self.phase += 1;
                self.session = phase_session(&PHASES[self.phase]);
            } else {
                self.completed = true;
            }
            return true;
        }
        self.session.tick(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.advance_at, self.session.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0;
        self.session = phase_session(&PHASES[0]);
        self.advance_at = None;
        self.completed = false;
    }
}

impl Default for QuestStage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage_with_target() -> QuestStage {
        let mut s = QuestStage::new();
        s.set_targets(vec![(ANSWER, Region { x: 0, y: 0, width: 10, height: 1 })]);
        s
    }

    fn drop_word(s: &mut QuestStage, word: &'static str, now: Instant) {
        s.pointer_down(Payload::Label(word), Point { x: 0, y: 5 }, now);
        s.pointer_up(Point { x: 1, y: 0 }, now);
    }

    #[test]
    fn wrong_word_message_dismisses_but_word_stays() {
        let mut s = stage_with_target();
        let now = Instant::now();
        drop_word(&mut s, "pink", now);
        assert_eq!(s.feedback().map(|f| f.verdict), Some(Verdict::Error));
        assert_eq!(s.filled_word(), Some(Payload::Label("pink")));

        assert!(s.tick(now + WRONG_WORD_DISMISS));
        assert!(s.feedback().is_none());
        assert_eq!(s.filled_word(), Some(Payload::Label("pink")));
        assert_eq!(s.phase_index(), 0);
    }

    #[test]
    fn correct_word_crosses_then_advances() {
        let mut s = stage_with_target();
        let now = Instant::now();
        drop_word(&mut s, "open", now);
        assert!(s.is_crossing());
        assert_eq!(s.phase_index(), 0);

        assert!(s.tick(now + CROSSING));
        assert!(!s.is_crossing());
        assert_eq!(s.phase_index(), 1);
        assert_eq!(s.filled_word(), None, "next phase starts with an empty slot");
        assert_eq!(s.phase().correct, "long");
    }

    #[test]
    fn last_phase_completes_the_quest() {
        let mut s = stage_with_target();
        let now = Instant::now();
        drop_word(&mut s, "open", now);
        s.tick(now + CROSSING);

        s.set_targets(vec![(ANSWER, Region { x: 0, y: 0, width: 10, height: 1 })]);
        drop_word(&mut s, "long", now + CROSSING);
        assert!(s.tick(now + CROSSING + CROSSING));
        assert!(s.is_completed());
    }

    #[test]
    fn input_is_ignored_while_crossing() {
        let mut s = stage_with_target();
        let now = Instant::now();
        drop_word(&mut s, "open", now);
        drop_word(&mut s, "sticky", now);
        assert!(s.is_crossing(), "gesture during crossing must not disturb the stage");
        assert_eq!(s.filled_word(), Some(Payload::Label("open")));
    }

    #[test]
    fn reset_returns_to_phase_zero() {
        let mut s = stage_with_target();
        let now = Instant::now();
        drop_word(&mut s, "open", now);
        s.reset();
        assert_eq!(s.phase_index(), 0);
        assert!(!s.is_crossing());
        assert!(s.next_deadline().is_none());
        assert!(!s.tick(now + CROSSING), "cancelled crossing timer must not fire");
    }
}
