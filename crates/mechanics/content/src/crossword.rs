//! Interlocked arithmetic crossword.
//!
//! Grid layout (rows 0-4, columns 0-6):
//!
//! ```text
//! . . 5 . . . .
//! . . + . . . .
//! 1 + 3 = ? . .
//! . . = . . . .
//! . . ? + 6 = ?
//! ```
//!
//! Targets: 1+3 = 4, 5+3 = 8, 8+6 = 14.

use std::time::Instant;

use mechanics_core::{
    Feedback, Payload, PlacementState, SessionConfig, SlotId, SlotSession,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Fixed number or operator glyph.
    Given(&'static str),
    Target { slot: SlotId, answer: i64 },
}

pub const ROWS: usize = 5;
pub const COLS: usize = 7;

pub const T1: SlotId = SlotId("t1");
pub const T2: SlotId = SlotId("t2");
pub const T3: SlotId = SlotId("t3");

pub const GRID: [[Option<Cell>; COLS]; ROWS] = [
    [None, None, Some(Cell::Given("5")), None, None, None, None],
    [None, None, Some(Cell::Given("+")), None, None, None, None],
    [
        Some(Cell::Given("1")),
        Some(Cell::Given("+")),
        Some(Cell::Given("3")),
        Some(Cell::Given("=")),
        Some(Cell::Target { slot: T1, answer: 4 }),
        None,
        None,
    ],
    [None, None, Some(Cell::Given("=")), None, None, None, None],
    [
        None,
        None,
        Some(Cell::Target { slot: T2, answer: 8 }),
        Some(Cell::Given("+")),
        Some(Cell::Given("6")),
        Some(Cell::Given("=")),
        Some(Cell::Target { slot: T3, answer: 14 }),
    ],
];

pub const BANK: &[i64] = &[4, 8, 14, 12, 7];

fn targets() -> impl Iterator<Item = (SlotId, i64)> {
    GRID.iter().flatten().flatten().filter_map(|cell| match cell {
        Cell::Target { slot, answer } => Some((*slot, *answer)),
        Cell::Given(_) => None,
    })
}

fn crossword_rule(placements: &PlacementState) -> Feedback {
    if !placements.is_complete() {
        return Feedback::incomplete();
    }
    let all_correct = targets()
        .all(|(slot, answer)| placements.get(slot) == Some(Payload::Number(answer)));
    if all_correct {
        Feedback::success().with_message("Parabéns! Desafio Concluído")
    } else {
        Feedback::error().with_message("Tente Novamente")
    }
}

pub struct CrosswordBoard {
    pub session: SlotSession,
}

impl CrosswordBoard {
    pub fn new() -> Self {
        Self {
            session: SlotSession::new(
                PlacementState::new(targets().map(|(slot, _)| slot)),
                Box::new(crossword_rule),
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

impl Default for CrosswordBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechanics_core::DEFAULT_ERROR_CLEAR;

    fn place(b: &mut CrosswordBoard, slot: SlotId, n: i64, now: Instant) {
        b.session.place_direct(slot, Payload::Number(n), now);
    }

    #[test]
    fn correct_fill_succeeds() {
        let mut b = CrosswordBoard::new();
        let now = Instant::now();
        place(&mut b, T1, 4, now);
        place(&mut b, T2, 8, now);
        place(&mut b, T3, 14, now);
        assert!(b.session.feedback().is_some_and(Feedback::is_success));
        assert!(b.session.is_locked());
    }

    #[test]
    fn wrong_fill_errors_and_auto_clears() {
        let mut b = CrosswordBoard::new();
        let now = Instant::now();
        place(&mut b, T1, 4, now);
        place(&mut b, T2, 8, now);
        place(&mut b, T3, 12, now);
        assert!(b.session.feedback().is_some_and(Feedback::is_error));

        assert!(b.tick(now + DEFAULT_ERROR_CLEAR));
        assert!(b.session.placements().iter().all(|(_, p)| p.is_none()));
    }

    #[test]
    fn partial_fill_stays_silent() {
        let mut b = CrosswordBoard::new();
        let now = Instant::now();
        place(&mut b, T1, 4, now);
        assert!(b.session.feedback().is_none());
        assert!(b.next_deadline().is_none());
    }

    #[test]
    fn grid_has_exactly_three_targets() {
        assert_eq!(targets().count(), 3);
    }
}
