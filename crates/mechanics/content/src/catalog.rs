//! The catalog table rendered by the gallery.

use mechanics_core::{Discipline, MechanicDescriptor, MechanicId, MechanicKind, Segment};

pub const CATALOG: &[MechanicDescriptor] = &[
    MechanicDescriptor {
        id: MechanicId("math-crossword"),
        title: "Cruzadinha Matemática",
        description: "Resolva equações interligadas horizontal e verticalmente arrastando os números para as posições corretas.",
        kind: MechanicKind::DragDrop,
        discipline: Discipline::Matematica,
        segments: &[Segment::AnosIniciais, Segment::AnosFinais],
        years: &["4º ano", "5º ano", "6º ano", "7º ano"],
    },
    MechanicDescriptor {
        id: MechanicId("math-equality-dnd"),
        title: "Igualdade Matemática (D&D)",
        description: "Arraste os números corretos para completar e balancear a equação (9 + ? = 15 - ?).",
        kind: MechanicKind::DragDrop,
        discipline: Discipline::Matematica,
        segments: &[Segment::AnosIniciais],
        years: &["1º ano", "2º ano", "3º ano"],
    },
    MechanicDescriptor {
        id: MechanicId("english-quest"),
        title: "English Quest: Obstacles",
        description: "Ajude o personagem a atravessar obstáculos completando frases em inglês com os adjetivos corretos.",
        kind: MechanicKind::DragDrop,
        discipline: Discipline::Ingles,
        segments: &[Segment::AnosIniciais],
        years: &["3º ano", "4º ano", "5º ano"],
    },
    MechanicDescriptor {
        id: MechanicId("color-theory"),
        title: "Laboratório de Cores",
        description: "Misture pigmentos (CMYK) ou luzes (RGB) para criar cores análogas e atender aos pedidos dos clientes.",
        kind: MechanicKind::Sequence,
        discipline: Discipline::Artes,
        segments: &[Segment::AnosFinais, Segment::EnsinoMedio],
        years: &["8º ano", "9º ano", "1ª série"],
    },
    MechanicDescriptor {
        id: MechanicId("geography-basin"),
        title: "Bacia Hidrográfica: Puzzle",
        description: "Monte o curso de um rio em uma malha quadriculada, conectando nascentes, afluentes e foz seguindo a lógica de escoamento.",
        kind: MechanicKind::DragDrop,
        discipline: Discipline::Geografia,
        segments: &[Segment::AnosFinais, Segment::EnsinoMedio],
        years: &["6º ano", "7º ano", "1ª série"],
    },
    MechanicDescriptor {
        id: MechanicId("science-trophic"),
        title: "Níveis Tróficos: Fluxo de Energia",
        description: "Posicione os seres vivos no trilho de fluxo energético para que a onça ocupe o nível trófico pedido.",
        kind: MechanicKind::DragDrop,
        discipline: Discipline::Ciencias,
        segments: &[Segment::AnosFinais],
        years: &["6º ano", "7º ano"],
    },
    MechanicDescriptor {
        id: MechanicId("geography-biomes"),
        title: "Biomas do Brasil",
        description: "Arraste os biomas brasileiros para suas localizações corretas no mapa.",
        kind: MechanicKind::DragDrop,
        discipline: Discipline::Geografia,
        segments: &[Segment::AnosFinais],
        years: &["6º ano", "7º ano"],
    },
    MechanicDescriptor {
        id: MechanicId("quiz-demo"),
        title: "Quiz: Gases Nobres",
        description: "Questão de múltipla escolha com feedback imediato e explicação da resposta.",
        kind: MechanicKind::Quiz,
        discipline: Discipline::Ciencias,
        segments: &[Segment::EnsinoMedio],
        years: &["1ª série", "2ª série"],
    },
    MechanicDescriptor {
        id: MechanicId("strategic-grouping"),
        title: "Agrupamento Estratégico: Soma",
        description: "Combine números que somem exatamente 10 e descubra a soma final da sequência.",
        kind: MechanicKind::Sorting,
        discipline: Discipline::Matematica,
        segments: &[Segment::AnosIniciais, Segment::AnosFinais],
        years: &["4º ano", "5º ano", "6º ano"],
    },
    MechanicDescriptor {
        id: MechanicId("chromatic-defense"),
        title: "Defesa Cromática",
        description: "Demonstração externa de defesa de torres baseada em mistura de cores.",
        kind: MechanicKind::Sequence,
        discipline: Discipline::Artes,
        segments: &[Segment::AnosFinais],
        years: &["8º ano", "9º ano"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_entry_targets_at_least_one_segment_and_year() {
        for m in CATALOG {
            assert!(!m.segments.is_empty(), "{} has no segment", m.id);
            assert!(!m.years.is_empty(), "{} has no years", m.id);
        }
    }
}
