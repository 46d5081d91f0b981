//! Strategic grouping: combine chips that sum to the target.
//!
//! Click-select chips, combine a selection summing to 10 and it collapses
//! into a single 10 chip at its leftmost position. The board detects the
//! stuck state (no remaining combination) and offers a final question:
//! typing the total of the remaining chips wins the game.

use std::time::{Duration, Instant};

use mechanics_core::{Feedback, Verdict};

pub const TARGET: i64 = 10;
pub const INITIAL: &[i64] = &[8, 2, 5, 3, 7];

const ERROR_DISMISS: Duration = Duration::from_millis(1500);

/// Any subset of two or more chips summing to the target?
pub fn has_valid_combination(values: &[i64]) -> bool {
    let n = values.len();
    if n < 2 {
        return false;
    }
    for mask in 1u32..(1u32 << n) {
        if mask.count_ones() < 2 {
            continue;
        }
        let sum: i64 = values
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, v)| v)
            .sum();
        if sum == TARGET {
            return true;
        }
    }
    false
}

pub struct GroupingBoard {
    chips: Vec<(u32, i64)>,
    selected: Vec<u32>,
    moves: u32,
    next_id: u32,
    feedback: Option<Feedback>,
    won: bool,
    stuck: bool,
    dismiss_at: Option<Instant>,
}

impl GroupingBoard {
    pub fn new() -> Self {
        let chips: Vec<(u32, i64)> =
            INITIAL.iter().enumerate().map(|(i, v)| (i as u32, *v)).collect();
        let next_id = chips.len() as u32;
        let mut board = Self {
            chips,
            selected: Vec::new(),
            moves: 0,
            next_id,
            feedback: None,
            won: false,
            stuck: false,
            dismiss_at: None,
        };
        board.refresh_stuck();
        board
    }

    pub fn chips(&self) -> &[(u32, i64)] {
        &self.chips
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn selected_sum(&self) -> i64 {
        self.chips
            .iter()
            .filter(|(id, _)| self.selected.contains(id))
            .map(|(_, v)| v)
            .sum()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_stuck(&self) -> bool {
        self.stuck
    }

    pub fn remaining_total(&self) -> i64 {
        self.chips.iter().map(|(_, v)| v).sum()
    }

    pub fn toggle(&mut self, id: u32) {
        if self.won || !self.chips.iter().any(|(cid, _)| *cid == id) {
            return;
        }
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
        self.feedback = None;
        self.dismiss_at = None;
    }

    /// Collapses the current selection when it sums to the target.
    pub fn combine(&mut self, now: Instant) {
        if self.won {
            return;
        }
        if self.selected.len() < 2 || self.selected_sum() != TARGET {
            self.feedback = Some(Feedback::error().with_message("A seleção não soma 10."));
            self.dismiss_at = Some(now + ERROR_DISMISS);
            self.selected.clear();
            return;
        }

        let leftmost = self
            .chips
            .iter()
            .position(|(id, _)| self.selected.contains(id))
            .unwrap_or(0);
        self.chips.retain(|(id, _)| !self.selected.contains(id));
        self.chips.insert(leftmost, (self.next_id, TARGET));
        self.next_id += 1;
        self.selected.clear();
        self.moves += 1;
        self.feedback = None;
        self.dismiss_at = None;

        if self.chips.len() == 1 {
            self.won = true;
            self.stuck = false;
        } else {
            self.refresh_stuck();
        }
    }

    /// Final question: the sum of every remaining chip.
    pub fn answer_total(&mut self, answer: i64, now: Instant) {
        if self.won {
            return;
        }
        if answer == self.remaining_total() {
            self.won = true;
            self.feedback = Some(Feedback::success().with_message("Soma final correta!"));
            self.dismiss_at = None;
        } else {
            self.feedback = Some(Feedback::error().with_message("Essa não é a soma restante."));
            self.dismiss_at = Some(now + ERROR_DISMISS);
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        match self.dismiss_at {
            Some(at) if now >= at => {
                self.dismiss_at = None;
                self.feedback = None;
                true
            }
            _ => false,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.dismiss_at
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn refresh_stuck(&mut self) {
        let values: Vec<i64> = self.chips.iter().map(|(_, v)| *v).collect();
        self.stuck = self.chips.len() > 1 && !has_valid_combination(&values);
        if self.stuck {
            self.feedback = Some(
                Feedback::incomplete()
                    .with_message("Sem combinações restantes. Qual é a soma dos números que sobraram?"),
            );
        }
    }
}

impl Default for GroupingBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_values(b: &mut GroupingBoard, values: &[i64]) {
        let ids: Vec<u32> = values
            .iter()
            .map(|v| {
                b.chips()
                    .iter()
                    .find(|(id, cv)| cv == v && !b.is_selected(*id))
                    .map(|(id, _)| *id)
                    .unwrap()
            })
            .collect();
        for id in ids {
            b.toggle(id);
        }
    }

    #[test]
    fn combining_a_valid_pair_collapses_into_one_chip() {
        let mut b = GroupingBoard::new();
        let now = Instant::now();
        select_values(&mut b, &[8, 2]);
        assert_eq!(b.selected_sum(), 10);
        b.combine(now);

        let values: Vec<i64> = b.chips().iter().map(|(_, v)| *v).collect();
        assert_eq!(values, [10, 5, 3, 7], "replacement lands at the leftmost position");
        assert_eq!(b.moves(), 1);
    }

    #[test]
    fn invalid_selection_errors_and_auto_dismisses() {
        let mut b = GroupingBoard::new();
        let now = Instant::now();
        select_values(&mut b, &[8, 5]);
        b.combine(now);
        assert!(b.feedback().is_some_and(Feedback::is_error));
        assert_eq!(b.selected_count(), 0);

        assert!(b.tick(now + ERROR_DISMISS));
        assert!(b.feedback().is_none());
    }

    #[test]
    fn stuck_state_is_detected() {
        let mut b = GroupingBoard::new();
        let now = Instant::now();
        select_values(&mut b, &[8, 2]);
        b.combine(now);
        select_values(&mut b, &[3, 7]);
        b.combine(now);
        // [10, 10, 5]: no subset of two or more sums to 10.
        assert!(b.is_stuck());
        assert_eq!(b.feedback().map(|f| f.verdict), Some(Verdict::Incomplete));
    }

    #[test]
    fn answering_the_remaining_total_wins() {
        let mut b = GroupingBoard::new();
        let now = Instant::now();
        select_values(&mut b, &[8, 2]);
        b.combine(now);
        select_values(&mut b, &[3, 7]);
        b.combine(now);

        b.answer_total(99, now);
        assert!(b.feedback().is_some_and(Feedback::is_error));
        assert!(!b.is_won());

        b.answer_total(25, now);
        assert!(b.is_won());
    }

    #[test]
    fn triple_sums_count_as_combinations() {
        assert!(has_valid_combination(&[2, 3, 5]));
        assert!(!has_valid_combination(&[10, 10, 5]));
        assert!(!has_valid_combination(&[10]));
    }

    #[test]
    fn reset_restores_the_initial_chips() {
        let mut b = GroupingBoard::new();
        let now = Instant::now();
        select_values(&mut b, &[8, 2]);
        b.combine(now);
        b.reset();
        let values: Vec<i64> = b.chips().iter().map(|(_, v)| *v).collect();
        assert_eq!(values, INITIAL);
        assert_eq!(b.moves(), 0);
        assert!(!b.is_stuck());
    }
}
