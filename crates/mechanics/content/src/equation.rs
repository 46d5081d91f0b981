//! Balance the equation `9 + ? = 15 - ?` by dragging numbers.

use std::time::Instant;

use mechanics_core::{
    Feedback, Payload, PlacementState, Point, SessionConfig, SlotId, SlotSession,
};

pub const LEFT_BASE: i64 = 9;
pub const RIGHT_BASE: i64 = 15;
pub const T1: SlotId = SlotId("t1");
pub const T2: SlotId = SlotId("t2");
pub const BANK: &[i64] = &[1, 5, 6, 10];

fn balance_rule(placements: &PlacementState) -> Feedback {
    match (placements.get(T1), placements.get(T2)) {
        (Some(Payload::Number(a)), Some(Payload::Number(b))) => {
            if LEFT_BASE + a == RIGHT_BASE - b {
                Feedback::success().with_message("Equação Balanceada")
            } else {
                Feedback::error().with_message("Tente Novamente")
            }
        }
        _ => Feedback::incomplete(),
    }
}

/// Two drop slots, a four-chip bank, evaluation on every placement.
pub struct EquationBoard {
    pub session: SlotSession,
}

impl EquationBoard {
    pub fn new() -> Self {
        Self {
            session: SlotSession::new(
                PlacementState::new([T1, T2]),
                Box::new(balance_rule),
                SessionConfig::on_placement(),
            ),
        }
    }

    pub fn bank(&self) -> impl Iterator<Item = Payload> {
        BANK.iter().map(|n| Payload::Number(*n))
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.session.tick(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.next_deadline()
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }
}

impl Default for EquationBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechanics_core::{DEFAULT_ERROR_CLEAR, Region};

    fn board_with_targets() -> EquationBoard {
        let mut b = EquationBoard::new();
        b.session.set_targets(vec![
            (T1, Region { x: 0, y: 0, width: 4, height: 1 }),
            (T2, Region { x: 4, y: 0, width: 4, height: 1 }),
        ]);
        b
    }

    fn drop(b: &mut EquationBoard, n: i64, x: u16, now: Instant) {
        b.session.pointer_down(Payload::Number(n), Point { x: 0, y: 5 }, now);
        b.session.pointer_up(Point { x, y: 0 }, now);
    }

    #[test]
    fn one_and_five_balance() {
        let mut b = board_with_targets();
        let now = Instant::now();
        drop(&mut b, 1, 1, now);
        drop(&mut b, 5, 5, now);
        assert!(b.session.feedback().is_some_and(Feedback::is_success));
        assert!(b.session.is_locked());
    }

    #[test]
    fn unbalanced_pair_errors_then_auto_resets() {
        let mut b = board_with_targets();
        let now = Instant::now();
        drop(&mut b, 1, 1, now);
        drop(&mut b, 6, 5, now);
        assert!(b.session.feedback().is_some_and(Feedback::is_error));

        assert!(b.tick(now + DEFAULT_ERROR_CLEAR));
        assert!(b.session.feedback().is_none());
        assert!(b.session.placements().iter().all(|(_, p)| p.is_none()));
    }
}
