//! Deterministic interaction logic shared by every mechanic.
//!
//! `mechanics-core` defines the canonical building blocks of the playground:
//! the catalog model, the filter engine, the pointer-driven drag interaction
//! engine, placement state, validation rules, and the per-mechanic session
//! state machine. It performs no I/O and renders nothing; the client and the
//! content crate compose the pieces re-exported here.
pub mod catalog;
pub mod drag;
pub mod feedback;
pub mod filter;
pub mod placement;
pub mod registry;
pub mod rule;
pub mod session;

pub use catalog::{Discipline, MechanicDescriptor, MechanicId, MechanicKind, Segment};
pub use drag::{DragEngine, DragEvent, DragPhase, Point, Region};
pub use feedback::{Feedback, Verdict};
pub use filter::{FilterState, filter};
pub use placement::{Payload, PlacementDelta, PlacementError, PlacementState, SlotId};
pub use registry::Registry;
pub use rule::{DEFAULT_ERROR_CLEAR, ErrorPolicy, EvalTrigger, Rule, SessionConfig};
pub use session::SlotSession;
