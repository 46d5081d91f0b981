//! River basin builder on a 5x5 grid.
//!
//! Click-driven: the player selects a piece from the palette and clicks
//! cells to place it. Clicking a cell that already holds the selected
//! piece rotates it a quarter turn instead. Validation is explicit.

use std::time::Instant;

use mechanics_core::{Feedback, Verdict};
use strum::{Display, EnumIter};

pub const GRID_SIZE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum PieceKind {
    #[strum(serialize = "Nascente")]
    Nascente,
    #[strum(serialize = "Reto")]
    Reto,
    #[strum(serialize = "Curva")]
    Curva,
    #[strum(serialize = "Afluente")]
    Afluente,
    #[strum(serialize = "Foz")]
    Foz,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub kind: Option<PieceKind>,
    /// Quarter turns, 0-3.
    pub rotation: u8,
}

/// Presence and count checks over the grid. Level 1 needs a source, a
/// mouth, and at least three pieces; level 2 additionally needs a
/// tributary and at least four pieces.
pub fn evaluate_grid(grid: &[[Tile; GRID_SIZE]; GRID_SIZE], level: u8) -> Feedback {
    let mut nascentes = 0;
    let mut fozes = 0;
    let mut afluentes = 0;
    let mut total = 0;
    for tile in grid.iter().flatten() {
        match tile.kind {
            Some(PieceKind::Nascente) => nascentes += 1,
            Some(PieceKind::Foz) => fozes += 1,
            Some(PieceKind::Afluente) => afluentes += 1,
            Some(_) => {}
            None => continue,
        }
        total += 1;
    }

    let complete = match level {
        1 => nascentes >= 1 && fozes >= 1 && total >= 3,
        _ => nascentes >= 1 && fozes >= 1 && afluentes >= 1 && total >= 4,
    };

    if complete {
        Feedback::success().with_message(
            "Parabéns! A bacia foi montada seguindo a lógica de escoamento correta.",
        )
    } else {
        Feedback::incomplete().with_message(
            "Você precisa garantir que haja uma nascente, o curso principal e uma foz (e afluentes na Fase 02).",
        )
    }
}

pub struct BasinBoard {
    grid: [[Tile; GRID_SIZE]; GRID_SIZE],
    selected: PieceKind,
    level: u8,
    feedback: Option<Feedback>,
    locked: bool,
}

impl BasinBoard {
    pub fn new() -> Self {
        Self {
            grid: [[Tile::default(); GRID_SIZE]; GRID_SIZE],
            selected: PieceKind::Reto,
            level: 1,
            feedback: None,
            locked: false,
        }
    }

    pub fn grid(&self) -> &[[Tile; GRID_SIZE]; GRID_SIZE] {
        &self.grid
    }

    pub fn selected(&self) -> PieceKind {
        self.selected
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn select(&mut self, piece: PieceKind) {
        self.selected = piece;
    }

    /// Switching levels rebuilds the grid from scratch.
    pub fn set_level(&mut self, level: u8) {
        if level != self.level {
            self.level = level;
            self.reset();
        }
    }

    /// Places the selected piece, or rotates the tile when it already
    /// holds that piece. Any edit drops stale feedback.
    pub fn place(&mut self, row: usize, col: usize) {
        if self.locked || row >= GRID_SIZE || col >= GRID_SIZE {
            return;
        }
        let tile = &mut self.grid[row][col];
        if tile.kind == Some(self.selected) {
            tile.rotation = (tile.rotation + 1) % 4;
        } else {
            tile.kind = Some(self.selected);
            tile.rotation = 0;
        }
        self.feedback = None;
    }

    pub fn clear_tile(&mut self, row: usize, col: usize) {
        if self.locked || row >= GRID_SIZE || col >= GRID_SIZE {
            return;
        }
        self.grid[row][col] = Tile::default();
        self.feedback = None;
    }

    pub fn validate(&mut self, _now: Instant) {
        if self.locked {
            return;
        }
        let feedback = evaluate_grid(&self.grid, self.level);
        self.locked = feedback.is_success();
        self.feedback = Some(feedback);
    }

    pub fn tick(&mut self, _now: Instant) -> bool {
        false
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        None
    }

    pub fn reset(&mut self) {
        self.grid = [[Tile::default(); GRID_SIZE]; GRID_SIZE];
        self.feedback = None;
        self.locked = false;
    }
}

impl Default for BasinBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_one_needs_source_mouth_and_three_pieces() {
        let mut b = BasinBoard::new();
        let now = Instant::now();

        b.select(PieceKind::Nascente);
        b.place(0, 0);
        b.validate(now);
        assert_eq!(b.feedback().map(|f| f.verdict), Some(Verdict::Incomplete));

        b.select(PieceKind::Reto);
        b.place(1, 0);
        b.select(PieceKind::Foz);
        b.place(2, 0);
        b.validate(now);
        assert!(b.feedback().is_some_and(Feedback::is_success));
        assert!(b.is_locked());
    }

    #[test]
    fn level_two_also_requires_a_tributary() {
        let mut b = BasinBoard::new();
        b.set_level(2);
        let now = Instant::now();

        b.select(PieceKind::Nascente);
        b.place(0, 0);
        b.select(PieceKind::Reto);
        b.place(1, 0);
        b.select(PieceKind::Curva);
        b.place(2, 0);
        b.select(PieceKind::Foz);
        b.place(3, 0);
        b.validate(now);
        assert_eq!(b.feedback().map(|f| f.verdict), Some(Verdict::Incomplete));

        b.select(PieceKind::Afluente);
        b.place(1, 1);
        b.validate(now);
        assert!(b.feedback().is_some_and(Feedback::is_success));
    }

    #[test]
    fn reclicking_the_same_piece_rotates() {
        let mut b = BasinBoard::new();
        b.select(PieceKind::Curva);
        b.place(2, 2);
        assert_eq!(b.grid()[2][2], Tile { kind: Some(PieceKind::Curva), rotation: 0 });
        b.place(2, 2);
        assert_eq!(b.grid()[2][2].rotation, 1);
        b.place(2, 2);
        b.place(2, 2);
        b.place(2, 2);
        assert_eq!(b.grid()[2][2].rotation, 0, "four quarter turns wrap");
    }

    #[test]
    fn placing_a_different_piece_replaces_and_clears_rotation() {
        let mut b = BasinBoard::new();
        b.select(PieceKind::Curva);
        b.place(2, 2);
        b.place(2, 2);
        b.select(PieceKind::Reto);
        b.place(2, 2);
        assert_eq!(b.grid()[2][2], Tile { kind: Some(PieceKind::Reto), rotation: 0 });
    }

    #[test]
    fn switching_level_rebuilds_the_grid() {
        let mut b = BasinBoard::new();
        b.select(PieceKind::Foz);
        b.place(4, 4);
        b.set_level(2);
        assert_eq!(b.grid()[4][4], Tile::default());
        assert_eq!(b.level(), 2);
    }

    #[test]
    fn edits_are_rejected_after_success() {
        let mut b = BasinBoard::new();
        let now = Instant::now();
        b.select(PieceKind::Nascente);
        b.place(0, 0);
        b.select(PieceKind::Reto);
        b.place(1, 0);
        b.select(PieceKind::Foz);
        b.place(2, 0);
        b.validate(now);
        assert!(b.is_locked());

        b.clear_tile(0, 0);
        assert_eq!(b.grid()[0][0].kind, Some(PieceKind::Nascente));
    }
}
