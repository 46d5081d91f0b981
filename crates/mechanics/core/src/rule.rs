//! Validation rules and per-mechanic session policy.

use std::time::Duration;

use crate::feedback::Feedback;
use crate::placement::{Payload, PlacementState, SlotId};

/// How long error feedback stays on screen before an automatic clear.
pub const DEFAULT_ERROR_CLEAR: Duration = Duration::from_millis(1500);

/// Judges the current placements of one mechanic.
///
/// Rules are pure: they read the placement state and return a verdict,
/// never mutating anything. Timing and clearing live in the session.
pub trait Rule: Send {
    fn evaluate(&self, placements: &PlacementState) -> Feedback;
}

impl<F> Rule for F
where
    F: Fn(&PlacementState) -> Feedback + Send,
{
    fn evaluate(&self, placements: &PlacementState) -> Feedback {
        self(placements)
    }
}

/// When the rule runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalTrigger {
    /// After every committed placement, once all slots are filled.
    OnPlacement,
    /// Only when the player asks for validation.
    Manual,
}

/// What happens after an error verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Clear the feedback and every placement after the delay.
    AutoClear(Duration),
    /// Clear only the feedback after the delay; placements stay.
    AutoDismiss(Duration),
    /// Feedback stays until the player acts again.
    Sticky,
}

/// Static behaviour knobs for one mechanic's session.
#[derive(Clone, Copy)]
pub struct SessionConfig {
    pub trigger: EvalTrigger,
    pub error_policy: ErrorPolicy,
    /// Optional per-slot gate: a drop is committed only when the predicate
    /// accepts the (slot, payload) pair. `None` accepts everything.
    pub acceptance: Option<fn(SlotId, &Payload) -> bool>,
}

impl SessionConfig {
    pub fn on_placement() -> Self {
        Self {
            trigger: EvalTrigger::OnPlacement,
            error_policy: ErrorPolicy::AutoClear(DEFAULT_ERROR_CLEAR),
            acceptance: None,
        }
    }

    pub fn manual() -> Self {
        Self {
            trigger: EvalTrigger::Manual,
            error_policy: ErrorPolicy::Sticky,
            acceptance: None,
        }
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn with_acceptance(mut self, accept: fn(SlotId, &Payload) -> bool) -> Self {
        self.acceptance = Some(accept);
        self
    }
}
