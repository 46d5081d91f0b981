//! Trophic levels: position organisms on the energy-flow rail.
//!
//! Slot 0 always holds the Sun and never accepts drops. Level 1 asks for
//! the jaguar on the third trophic level (four slots), level 2 on the
//! fourth (five slots). Validation is explicit and errors are sticky,
//! with a message naming the broken level.

use std::time::Instant;

use mechanics_core::{
    Feedback, Payload, PlacementState, Point, Region, SessionConfig, SlotId, SlotSession,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrophicKind {
    Energy,
    Producer,
    ConsumerPrimary,
    ConsumerSecondary,
    ConsumerTop,
}

pub struct Organism {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: TrophicKind,
    pub icon: &'static str,
    pub role: &'static str,
}

pub const ORGANISMS: &[Organism] = &[
    Organism { id: "sun", name: "Sol", kind: TrophicKind::Energy, icon: "☀", role: "Fonte de Energia" },
    Organism { id: "leaf", name: "Folha", kind: TrophicKind::Producer, icon: "🍃", role: "Produtor" },
    Organism { id: "shrub", name: "Arbusto", kind: TrophicKind::Producer, icon: "🌳", role: "Produtor" },
    Organism { id: "squirrel", name: "Esquilo", kind: TrophicKind::ConsumerPrimary, icon: "🐿", role: "Consumidor Primário" },
    Organism { id: "fox", name: "Raposa", kind: TrophicKind::ConsumerSecondary, icon: "🦊", role: "Consumidor Secundário" },
    Organism { id: "lynx", name: "Lince", kind: TrophicKind::ConsumerSecondary, icon: "🐱", role: "Consumidor Secundário" },
    Organism { id: "jaguar", name: "Onça", kind: TrophicKind::ConsumerTop, icon: "🐆", role: "Consumidor Topo" },
];

pub fn organism(id: &str) -> Option<&'static Organism> {
    ORGANISMS.iter().find(|o| o.id == id)
}

const SLOTS: [SlotId; 5] = [
    SlotId("n0"),
    SlotId("n1"),
    SlotId("n2"),
    SlotId("n3"),
    SlotId("n4"),
];

fn kind_at(placements: &PlacementState, slot: SlotId) -> Option<TrophicKind> {
    match placements.get(slot)? {
        Payload::Label(id) => organism(id).map(|o| o.kind),
        Payload::Number(_) => None,
    }
}

fn id_at(placements: &PlacementState, slot: SlotId) -> Option<&'static str> {
    match placements.get(slot)? {
        Payload::Label(id) => Some(id),
        Payload::Number(_) => None,
    }
}

fn rail_rule(level: u8) -> impl Fn(&PlacementState) -> Feedback + Send {
    move |placements| {
        if !placements.is_complete() {
            return Feedback::error().with_message(
                "A cadeia está incompleta. Todos os níveis precisam de um organismo.",
            );
        }
        if kind_at(placements, SLOTS[1]) != Some(TrophicKind::Producer) {
            return Feedback::error().with_message(
                "Erro no 1º nível: Este nível deve ser ocupado por um produtor capaz de realizar fotossíntese.",
            );
        }
        if kind_at(placements, SLOTS[2]) != Some(TrophicKind::ConsumerPrimary) {
            return Feedback::error().with_message(
                "Erro no 2º nível: Este nível deve ser ocupado por um consumidor primário (que se alimenta do produtor).",
            );
        }
        if level == 1 {
            if id_at(placements, SLOTS[3]) != Some("jaguar") {
                return Feedback::error().with_message(
                    "O objetivo não foi alcançado: A Onça deve estar posicionada no 3º nível deste fluxo.",
                );
            }
        } else {
            if kind_at(placements, SLOTS[3]) != Some(TrophicKind::ConsumerSecondary) {
                return Feedback::error().with_message(
                    "Erro no 3º nível: Para a onça chegar ao 4º nível, o 3º deve ser um consumidor secundário.",
                );
            }
            if id_at(placements, SLOTS[4]) != Some("jaguar") {
                return Feedback::error().with_message(
                    "O objetivo não foi alcançado: A Onça deve estar posicionada no 4º nível deste fluxo.",
                );
            }
        }
        Feedback::success().with_message(format!(
            "Parabéns! O fluxo energético está correto e a Onça ocupa o {}º nível trófico.",
            if level == 1 { 3 } else { 4 }
        ))
    }
}

fn not_the_energy_slot(slot: SlotId, _payload: &Payload) -> bool {
    slot != SLOTS[0]
}

fn rail_session(level: u8) -> SlotSession {
    let count = if level == 1 { 4 } else { 5 };
    let mut placement =
        PlacementState::new(SLOTS[..count].iter().copied()).with_unlimited_supply();
    // Infallible: the energy slot was registered just above.
    let _ = placement.place(SLOTS[0], Payload::Label("sun"));
    SlotSession::new(
        placement,
        Box::new(rail_rule(level)),
        SessionConfig::manual().with_acceptance(not_the_energy_slot),
    )
}

pub struct TrophicRail {
    pub session: SlotSession,
    level: u8,
}

impl TrophicRail {
    pub fn new() -> Self {
        Self { session: rail_session(1), level: 1 }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn slot_count(&self) -> usize {
        if self.level == 1 { 4 } else { 5 }
    }

    pub fn slots(&self) -> &'static [SlotId] {
        &SLOTS[..self.slot_count()]
    }

    pub fn set_level(&mut self, level: u8) {
        if level != self.level {
            self.level = level;
            self.session = rail_session(level);
        }
    }

    pub fn set_targets(&mut self, targets: Vec<(SlotId, Region)>) {
        self.session.set_targets(targets);
    }

    pub fn pointer_down(&mut self, payload: Payload, at: Point, now: Instant) {
        self.session.pointer_down(payload, at, now);
    }

    pub fn pointer_move(&mut self, at: Point) {
        self.session.pointer_move(at);
    }

    pub fn pointer_up(&mut self, at: Point, now: Instant) {
        self.session.pointer_up(at, now);
    }

    pub fn validate(&mut self, now: Instant) {
        self.session.check(now);
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.session.tick(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.next_deadline()
    }

    pub fn reset(&mut self) {
        self.session = rail_session(self.level);
    }
}

impl Default for TrophicRail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechanics_core::Verdict;

    fn fill(rail: &mut TrophicRail, ids: &[&'static str], now: Instant) {
        for (i, id) in ids.iter().enumerate() {
            rail.session.place_direct(SLOTS[i + 1], Payload::Label(id), now);
        }
    }

    #[test]
    fn level_one_wants_the_jaguar_on_the_third_level() {
        let mut rail = TrophicRail::new();
        let now = Instant::now();
        fill(&mut rail, &["leaf", "squirrel", "jaguar"], now);
        rail.validate(now);
        assert!(rail.session.feedback().is_some_and(Feedback::is_success));
    }

    #[test]
    fn level_one_rejects_a_secondary_consumer_at_the_top() {
        let mut rail = TrophicRail::new();
        let now = Instant::now();
        fill(&mut rail, &["leaf", "squirrel", "fox"], now);
        rail.validate(now);
        let fb = rail.session.feedback().unwrap();
        assert_eq!(fb.verdict, Verdict::Error);
        assert!(fb.message.as_deref().unwrap().contains("3º nível"));
        // Sticky: no pending timer.
        assert!(rail.next_deadline().is_none());
    }

    #[test]
    fn level_two_needs_a_secondary_consumer_before_the_jaguar() {
        let mut rail = TrophicRail::new();
        rail.set_level(2);
        let now = Instant::now();
        fill(&mut rail, &["shrub", "squirrel", "lynx", "jaguar"], now);
        rail.validate(now);
        assert!(rail.session.feedback().is_some_and(Feedback::is_success));

        rail.reset();
        fill(&mut rail, &["shrub", "squirrel", "squirrel", "jaguar"], now);
        rail.validate(now);
        assert!(rail.session.feedback().is_some_and(Feedback::is_error));
    }

    #[test]
    fn incomplete_chain_names_the_problem() {
        let mut rail = TrophicRail::new();
        let now = Instant::now();
        fill(&mut rail, &["leaf"], now);
        rail.validate(now);
        let fb = rail.session.feedback().unwrap();
        assert!(fb.message.as_deref().unwrap().contains("incompleta"));
    }

    #[test]
    fn energy_slot_rejects_drops() {
        let mut rail = TrophicRail::new();
        let now = Instant::now();
        assert!(rail.session.place_direct(SLOTS[0], Payload::Label("fox"), now).is_none());
        assert_eq!(rail.session.placements().get(SLOTS[0]), Some(Payload::Label("sun")));
    }

    #[test]
    fn level_switch_rebuilds_the_rail() {
        let mut rail = TrophicRail::new();
        let now = Instant::now();
        fill(&mut rail, &["leaf", "squirrel", "jaguar"], now);
        rail.set_level(2);
        assert_eq!(rail.slot_count(), 5);
        assert_eq!(rail.session.placements().get(SLOTS[1]), None);
        assert_eq!(rail.session.placements().get(SLOTS[0]), Some(Payload::Label("sun")));
    }
}
