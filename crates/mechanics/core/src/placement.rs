//! Slot placement state shared by the drag-and-drop mechanics.

use std::fmt;

use thiserror::Error;

/// Identifies a drop slot within one mechanic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotId(pub &'static str);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A draggable value. Numbers for the math boards, labels for everything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Payload {
    Number(i64),
    Label(&'static str),
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Number(n) => write!(f, "{n}"),
            Payload::Label(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("unknown slot: {0}")]
    UnknownSlot(SlotId),
}

/// What a single `place` call changed, for logging and for callers that
/// need to mirror the move in their own view state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementDelta {
    /// Slot that received the payload.
    pub slot: SlotId,
    /// Payload that previously occupied the target slot, if any.
    pub evicted: Option<Payload>,
    /// Slot the payload was moved out of, when the supply is limited.
    pub vacated: Option<SlotId>,
}

/// Mapping from slots to their current occupants.
///
/// With a limited supply (the default) each payload value occupies at most
/// one slot: placing it again moves it, vacating its previous slot. With
/// `unlimited_supply` the same value may sit in many slots at once.
#[derive(Clone, Debug)]
pub struct PlacementState {
    slots: Vec<(SlotId, Option<Payload>)>,
    unlimited_supply: bool,
}

impl PlacementState {
    pub fn new(slots: impl IntoIterator<Item = SlotId>) -> Self {
        Self {
            slots: slots.into_iter().map(|s| (s, None)).collect(),
            unlimited_supply: false,
        }
    }

    pub fn with_unlimited_supply(mut self) -> Self {
        self.unlimited_supply = true;
        self
    }

    /// Places `payload` into `slot`, replacing any previous occupant.
    ///
    /// Re-placing a payload into the slot it already occupies is a no-op
    /// move (the delta reports no vacated slot).
    pub fn place(&mut self, slot: SlotId, payload: Payload) -> Result<PlacementDelta, PlacementError> {
        if !self.slots.iter().any(|(s, _)| *s == slot) {
            return Err(PlacementError::UnknownSlot(slot));
        }

        let mut vacated = None;
        if !self.unlimited_supply {
            for (s, occupant) in &mut self.slots {
                if *s != slot && *occupant == Some(payload) {
                    *occupant = None;
                    vacated = Some(*s);
                }
            }
        }

        let entry = self
            .slots
            .iter_mut()
            .find(|(s, _)| *s == slot)
            .map(|(_, occupant)| occupant)
            .ok_or(PlacementError::UnknownSlot(slot))?;
        let evicted = entry.filter(|p| *p != payload);
        *entry = Some(payload);

        Ok(PlacementDelta { slot, evicted, vacated })
    }

    pub fn clear(&mut self, slot: SlotId) {
        if let Some((_, occupant)) = self.slots.iter_mut().find(|(s, _)| *s == slot) {
            *occupant = None;
        }
    }

    pub fn clear_all(&mut self) {
        for (_, occupant) in &mut self.slots {
            *occupant = None;
        }
    }

    pub fn get(&self, slot: SlotId) -> Option<Payload> {
        self.slots
            .iter()
            .find(|(s, _)| *s == slot)
            .and_then(|(_, occupant)| *occupant)
    }

    /// Whether the payload currently occupies any slot. Always `false`
    /// under an unlimited supply, so source chips never grey out.
    pub fn is_used(&self, payload: Payload) -> bool {
        !self.unlimited_supply && self.slots.iter().any(|(_, occupant)| *occupant == Some(payload))
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|(_, occupant)| occupant.is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, Option<Payload>)> + '_ {
        self.slots.iter().copied()
    }
}
