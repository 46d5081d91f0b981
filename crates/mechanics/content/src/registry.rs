//! Wires catalog ids to board constructors.

use std::time::Instant;

use mechanics_core::{MechanicId, Registry};

use crate::basin::BasinBoard;
use crate::biomes::BiomesBoard;
use crate::color_lab::ColorLab;
use crate::crossword::CrosswordBoard;
use crate::equation::EquationBoard;
use crate::external::{CHROMATIC_DEFENSE, ExternalPanel};
use crate::grouping::GroupingBoard;
use crate::quest::QuestStage;
use crate::quiz::QuizBoard;
use crate::trophic::TrophicRail;

/// Runtime state of one opened mechanic.
pub enum Instance {
    Equation(EquationBoard),
    Crossword(CrosswordBoard),
    Quest(QuestStage),
    ColorLab(ColorLab),
    Basin(BasinBoard),
    Trophic(TrophicRail),
    Biomes(BiomesBoard),
    Quiz(QuizBoard),
    Grouping(GroupingBoard),
    External(&'static ExternalPanel),
}

impl Instance {
    /// Advances pending timers. Returns `true` when state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self {
            Instance::Equation(b) => b.tick(now),
            Instance::Crossword(b) => b.tick(now),
            Instance::Quest(b) => b.tick(now),
            Instance::ColorLab(b) => b.tick(now),
            Instance::Basin(b) => b.tick(now),
            Instance::Trophic(b) => b.tick(now),
            Instance::Biomes(b) => b.tick(now),
            Instance::Quiz(b) => b.tick(now),
            Instance::Grouping(b) => b.tick(now),
            Instance::External(_) => false,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match self {
            Instance::Equation(b) => b.next_deadline(),
            Instance::Crossword(b) => b.next_deadline(),
            Instance::Quest(b) => b.next_deadline(),
            Instance::ColorLab(b) => b.next_deadline(),
            Instance::Basin(b) => b.next_deadline(),
            Instance::Trophic(b) => b.next_deadline(),
            Instance::Biomes(b) => b.next_deadline(),
            Instance::Quiz(b) => b.next_deadline(),
            Instance::Grouping(b) => b.next_deadline(),
            Instance::External(_) => None,
        }
    }

    /// Applies a configured error-clear delay to the boards that use a
    /// timed error policy.
    pub fn set_error_delay(&mut self, delay: std::time::Duration) {
        match self {
            Instance::Equation(b) => b.session.set_error_delay(delay),
            Instance::Crossword(b) => b.session.set_error_delay(delay),
            _ => {}
        }
    }

    pub fn reset(&mut self) {
        match self {
            Instance::Equation(b) => b.reset(),
            Instance::Crossword(b) => b.reset(),
            Instance::Quest(b) => b.reset(),
            Instance::ColorLab(b) => b.reset(),
            Instance::Basin(b) => b.reset(),
            Instance::Trophic(b) => b.reset(),
            Instance::Biomes(b) => b.reset(),
            Instance::Quiz(b) => b.reset(),
            Instance::Grouping(b) => b.reset(),
            Instance::External(_) => {}
        }
    }
}

pub fn build_registry() -> Registry<Instance> {
    let mut registry = Registry::new();
    registry.register(MechanicId("math-equality-dnd"), || {
        Instance::Equation(EquationBoard::new())
    });
    registry.register(MechanicId("math-crossword"), || {
        Instance::Crossword(CrosswordBoard::new())
    });
    registry.register(MechanicId("english-quest"), || Instance::Quest(QuestStage::new()));
    registry.register(MechanicId("color-theory"), || Instance::ColorLab(ColorLab::new()));
    registry.register(MechanicId("geography-basin"), || Instance::Basin(BasinBoard::new()));
    registry.register(MechanicId("science-trophic"), || Instance::Trophic(TrophicRail::new()));
    registry.register(MechanicId("geography-biomes"), || Instance::Biomes(BiomesBoard::new()));
    registry.register(MechanicId("quiz-demo"), || Instance::Quiz(QuizBoard::new()));
    registry.register(MechanicId("strategic-grouping"), || {
        Instance::Grouping(GroupingBoard::new())
    });
    registry.register(MechanicId("chromatic-defense"), || {
        Instance::External(&CHROMATIC_DEFENSE)
    });
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn every_catalog_entry_has_a_constructor() {
        let registry = build_registry();
        for descriptor in CATALOG {
            assert!(registry.contains(descriptor.id), "missing constructor for {}", descriptor.id);
        }
    }

    #[test]
    fn instances_are_fresh_per_launch() {
        let registry = build_registry();
        let first = registry.instantiate(MechanicId("quiz-demo"));
        let second = registry.instantiate(MechanicId("quiz-demo"));
        match (first, second) {
            (Some(Instance::Quiz(mut a)), Some(Instance::Quiz(b))) => {
                a.answer(0);
                assert!(a.is_answered());
                assert!(!b.is_answered());
            }
            _ => panic!("expected quiz instances"),
        }
    }
}
