//! Pure filter engine over the catalog.

use crate::catalog::{Discipline, MechanicDescriptor, MechanicKind, Segment};

/// Active taxonomy filters. `None` means "all" for that axis.
///
/// The free-text search query is held separately by the caller; it is an
/// input to [`filter`], not part of this state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub segment: Option<Segment>,
    pub discipline: Option<Discipline>,
    pub kind: Option<MechanicKind>,
}

impl FilterState {
    /// Returns all filters to their "all" defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Computes the visible subset of the catalog.
///
/// Pure and deterministic. A descriptor matches iff every active taxonomy
/// filter matches and, when the query is non-empty, the query is a
/// case-insensitive substring of the title or the description. Output
/// preserves catalog insertion order; an empty result is a valid output.
pub fn filter<'a>(
    catalog: &'a [MechanicDescriptor],
    state: &FilterState,
    query: &str,
) -> Vec<&'a MechanicDescriptor> {
    let needle = query.trim().to_lowercase();

    catalog
        .iter()
        .filter(|m| state.segment.is_none_or(|s| m.segments.contains(&s)))
        .filter(|m| state.discipline.is_none_or(|d| m.discipline == d))
        .filter(|m| state.kind.is_none_or(|k| m.kind == k))
        .filter(|m| {
            needle.is_empty()
                || m.title.to_lowercase().contains(&needle)
                || m.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MechanicId;

    const CATALOG: &[MechanicDescriptor] = &[
        MechanicDescriptor {
            id: MechanicId("alpha"),
            title: "Cruzadinha",
            description: "Resolva equações arrastando números.",
            kind: MechanicKind::DragDrop,
            discipline: Discipline::Matematica,
            segments: &[Segment::AnosIniciais, Segment::AnosFinais],
            years: &["4º ano"],
        },
        MechanicDescriptor {
            id: MechanicId("beta"),
            title: "Laboratório de Cores",
            description: "Misture pigmentos para atender pedidos.",
            kind: MechanicKind::Sequence,
            discipline: Discipline::Artes,
            segments: &[Segment::EnsinoMedio],
            years: &["1ª série"],
        },
        MechanicDescriptor {
            id: MechanicId("gamma"),
            title: "Quest",
            description: "Complete frases arrastando palavras.",
            kind: MechanicKind::DragDrop,
            discipline: Discipline::Ingles,
            segments: &[Segment::AnosIniciais],
            years: &["3º ano"],
        },
    ];

    #[test]
    fn default_state_returns_everything_in_order() {
        let out = filter(CATALOG, &FilterState::default(), "");
        let ids: Vec<_> = out.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn taxonomy_filters_compose() {
        let state = FilterState {
            segment: Some(Segment::AnosIniciais),
            discipline: None,
            kind: Some(MechanicKind::DragDrop),
        };
        let out = filter(CATALOG, &state, "");
        let ids: Vec<_> = out.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, ["alpha", "gamma"]);
    }

    #[test]
    fn query_matches_title_or_description_case_insensitively() {
        let out = filter(CATALOG, &FilterState::default(), "ARRASTANDO");
        assert_eq!(out.len(), 2);

        let out = filter(CATALOG, &FilterState::default(), "laboratório");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, MechanicId("beta"));
    }

    #[test]
    fn empty_result_when_nothing_satisfies_all_predicates() {
        let state = FilterState {
            segment: Some(Segment::EducacaoInfantil),
            ..FilterState::default()
        };
        assert!(filter(CATALOG, &state, "").is_empty());

        // Query and taxonomy must both hold.
        let state = FilterState {
            discipline: Some(Discipline::Artes),
            ..FilterState::default()
        };
        assert!(filter(CATALOG, &state, "equações").is_empty());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = FilterState {
            segment: Some(Segment::EnsinoMedio),
            discipline: Some(Discipline::Artes),
            kind: Some(MechanicKind::Quiz),
        };
        state.reset();
        assert!(state.is_default());
    }
}
