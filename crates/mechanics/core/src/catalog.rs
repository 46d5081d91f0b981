//! Catalog model: immutable descriptors for every mechanic.
//!
//! Descriptors are constructed once as a static table in the content crate
//! and never mutated afterwards.

use std::fmt;

use strum::{Display, EnumIter};

/// Unique identifier of a mechanic within the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MechanicId(pub &'static str);

impl fmt::Display for MechanicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// School segment a mechanic targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Segment {
    #[strum(serialize = "Educação Infantil")]
    EducacaoInfantil,
    #[strum(serialize = "Anos Iniciais")]
    AnosIniciais,
    #[strum(serialize = "Anos Finais")]
    AnosFinais,
    #[strum(serialize = "Ensino Médio")]
    EnsinoMedio,
}

/// Subject discipline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Discipline {
    #[strum(serialize = "Matemática")]
    Matematica,
    #[strum(serialize = "Português")]
    Portugues,
    #[strum(serialize = "Ciências")]
    Ciencias,
    #[strum(serialize = "História")]
    Historia,
    #[strum(serialize = "Geografia")]
    Geografia,
    #[strum(serialize = "Inglês")]
    Ingles,
    #[strum(serialize = "Artes")]
    Artes,
}

/// Broad interaction category shown in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum MechanicKind {
    #[strum(serialize = "Drag and Drop")]
    DragDrop,
    #[strum(serialize = "Múltipla Escolha")]
    Quiz,
    #[strum(serialize = "Jogo da Memória")]
    Memory,
    #[strum(serialize = "Classificação")]
    Sorting,
    #[strum(serialize = "Ordenação")]
    Sequence,
}

/// Immutable description of one mechanic, as listed in the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MechanicDescriptor {
    pub id: MechanicId,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: MechanicKind,
    pub discipline: Discipline,
    pub segments: &'static [Segment],
    pub years: &'static [&'static str],
}
