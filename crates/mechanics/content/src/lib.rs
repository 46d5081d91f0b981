//! Static catalog content and per-mechanic datasets.
//!
//! This crate houses everything data-shaped that the engine consumes:
//! - the catalog table shown in the gallery
//! - per-mechanic boards (datasets + rules + runtime state)
//! - the registry wiring catalog ids to board constructors
//!
//! Boards compose `mechanics-core` building blocks; nothing here renders
//! or performs I/O.

pub mod basin;
pub mod biomes;
pub mod catalog;
pub mod color_lab;
pub mod crossword;
pub mod equation;
pub mod external;
pub mod grouping;
pub mod quest;
pub mod quiz;
pub mod registry;
pub mod trophic;

pub use basin::{BasinBoard, PieceKind, Tile};
pub use biomes::{BIOMES, Biome, BiomesBoard};
pub use catalog::CATALOG;
pub use color_lab::{ColorLab, ColorMode};
pub use crossword::{Cell, CrosswordBoard};
pub use equation::EquationBoard;
pub use external::ExternalPanel;
pub use grouping::GroupingBoard;
pub use quest::{QuestPhase, QuestStage};
pub use quiz::QuizBoard;
pub use registry::{Instance, build_registry};
pub use trophic::{ORGANISMS, Organism, TrophicKind, TrophicRail};
