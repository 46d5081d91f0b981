//! Biomas do Brasil: drag each biome label onto its map zone.
//!
//! A zone only accepts its own biome; a non-matching drop is a silent
//! no-op. There is no error state, the board completes when all six
//! labels are placed.

use std::time::Instant;

use mechanics_core::{
    Feedback, Payload, PlacementState, Point, Region, SessionConfig, SlotId, SlotSession,
};

pub struct Biome {
    pub id: &'static str,
    pub name: &'static str,
    pub hint: &'static str,
    pub color: (u8, u8, u8),
}

pub const BIOMES: &[Biome] = &[
    Biome { id: "am", name: "Amazônia", hint: "Clima equatorial e maior biodiversidade.", color: (0x15, 0x80, 0x3d) },
    Biome { id: "ce", name: "Cerrado", hint: "A savana brasileira com árvores retorcidas.", color: (0xea, 0xb3, 0x08) },
    Biome { id: "ca", name: "Caatinga", hint: "Bioma semiárido exclusivo do Brasil.", color: (0xb4, 0x53, 0x09) },
    Biome { id: "ma", name: "Mata Atlântica", hint: "Floresta costeira com alto endemismo.", color: (0x16, 0xa3, 0x4a) },
    Biome { id: "pa", name: "Pantanal", hint: "A maior planície inundável do mundo.", color: (0x0e, 0xa5, 0xe9) },
    Biome { id: "pm", name: "Pampa", hint: "Campos sulinos predominantes no RS.", color: (0x84, 0xcc, 0x16) },
];

/// Approximate zone anchors as (top, left) percentages of the map area.
pub const ZONES: [(u16, u16); 6] = [(20, 30), (50, 50), (35, 70), (65, 75), (65, 40), (85, 45)];

pub fn biome(id: &str) -> Option<&'static Biome> {
    BIOMES.iter().find(|b| b.id == id)
}

fn zone_accepts_own_biome(slot: SlotId, payload: &Payload) -> bool {
    matches!(payload, Payload::Label(id) if *id == slot.0)
}

fn completion_rule(placements: &PlacementState) -> Feedback {
    if placements.is_complete() {
        Feedback::success().with_message(
            "Você identificou corretamente todos os principais biomas brasileiros e suas localizações aproximadas.",
        )
    } else {
        Feedback::incomplete()
    }
}

pub struct BiomesBoard {
    pub session: SlotSession,
}

impl BiomesBoard {
    pub fn new() -> Self {
        Self {
            session: SlotSession::new(
                PlacementState::new(BIOMES.iter().map(|b| SlotId(b.id))),
                Box::new(completion_rule),
                SessionConfig::on_placement().with_acceptance(zone_accepts_own_biome),
            ),
        }
    }

    pub fn is_placed(&self, id: &'static str) -> bool {
        self.session.placements().get(SlotId(id)).is_some()
    }

    pub fn pointer_down(&mut self, payload: Payload, at: Point, now: Instant) {
        // A placed label cannot be picked up again.
        if let Payload::Label(id) = payload
            && self.is_placed(id)
        {
            return;
        }
        self.session.pointer_down(payload, at, now);
    }

    pub fn pointer_move(&mut self, at: Point) {
        self.session.pointer_move(at);
    }

    pub fn pointer_up(&mut self, at: Point, now: Instant) {
        self.session.pointer_up(at, now);
    }

    pub fn set_targets(&mut self, targets: Vec<(SlotId, Region)>) {
        self.session.set_targets(targets);
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

impl Default for BiomesBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_zone_is_a_silent_no_op() {
        let mut b = BiomesBoard::new();
        let now = Instant::now();
        assert!(b.session.place_direct(SlotId("ce"), Payload::Label("am"), now).is_none());
        assert!(!b.is_placed("ce"));
        assert!(b.session.feedback().is_none());
    }

    #[test]
    fn completes_when_all_six_are_placed() {
        let mut b = BiomesBoard::new();
        let now = Instant::now();
        for biome in BIOMES {
            assert!(b.session.feedback().is_none());
            b.session.place_direct(SlotId(biome.id), Payload::Label(biome.id), now);
        }
        assert!(b.session.feedback().is_some_and(Feedback::is_success));
        assert!(b.session.is_locked());
    }

    #[test]
    fn a_placed_label_cannot_be_dragged_again() {
        let mut b = BiomesBoard::new();
        let now = Instant::now();
        b.session.place_direct(SlotId("am"), Payload::Label("am"), now);
        b.pointer_down(Payload::Label("am"), Point { x: 0, y: 0 }, now);
        assert!(b.session.drag_proxy().is_none());
    }
}
