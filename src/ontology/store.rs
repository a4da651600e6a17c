use std::sync::{Arc, RwLock};

use super::entities::Ontology;

/// Process-wide holder of the single active ontology.
///
/// Uploads replace the handle wholesale; readers take an [`Arc`] snapshot at
/// the start of a request and keep working against it even if a concurrent
/// upload swaps the handle mid-flight.
#[derive(Clone, Default)]
pub struct OntologyStore {
    current: Arc<RwLock<Option<Arc<Ontology>>>>,
}

impl OntologyStore {
    /// Creates an empty store with no ontology loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active ontology, returning the snapshot that now serves
    /// readers.
    pub fn swap(&self, ontology: Ontology) -> Arc<Ontology> {
        let snapshot = Arc::new(ontology);
        let mut guard = self.current.write().expect("ontology store poisoned");
        *guard = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Returns a snapshot of the active ontology, if one is loaded.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<Ontology>> {
        self.current
            .read()
            .expect("ontology store poisoned")
            .clone()
    }

    /// Reports whether an ontology is currently loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.current
            .read()
            .expect("ontology store poisoned")
            .is_some()
    }
}
