//! Lookup table from catalog ids to runtime constructors.

use crate::catalog::MechanicId;

/// Maps each mechanic id to a constructor for its runtime state.
///
/// Replaces ad-hoc dispatch at the launch site: the client asks the
/// registry for a fresh instance and never matches on ids itself.
pub struct Registry<T> {
    entries: Vec<(MechanicId, fn() -> T)>,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Registers a constructor. Last registration wins on duplicate ids.
    pub fn register(&mut self, id: MechanicId, build: fn() -> T) {
        self.entries.retain(|(existing, _)| *existing != id);
        self.entries.push((id, build));
    }

    /// Builds a fresh instance, or `None` for an unregistered id.
    pub fn instantiate(&self, id: MechanicId) -> Option<T> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, build)| build())
    }

    pub fn contains(&self, id: MechanicId) -> bool {
        self.entries.iter().any(|(existing, _)| *existing == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instantiate_builds_independent_instances() {
        let mut r: Registry<Vec<u8>> = Registry::new();
        r.register(MechanicId("a"), || vec![1, 2]);

        let mut first = r.instantiate(MechanicId("a")).unwrap();
        first.push(3);
        let second = r.instantiate(MechanicId("a")).unwrap();
        assert_eq!(second, vec![1, 2], "each instantiation starts fresh");
    }

    #[test]
    fn unknown_id_yields_none() {
        let r: Registry<u8> = Registry::new();
        assert!(r.instantiate(MechanicId("missing")).is_none());
        assert!(!r.contains(MechanicId("missing")));
    }

    #[test]
    fn duplicate_registration_replaces() {
        let mut r: Registry<u8> = Registry::new();
        r.register(MechanicId("a"), || 1);
        r.register(MechanicId("a"), || 2);
        assert_eq!(r.len(), 1);
        assert_eq!(r.instantiate(MechanicId("a")), Some(2));
    }
}
