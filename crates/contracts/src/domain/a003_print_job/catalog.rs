use super::aggregate::{sample_print_jobs, PrintJob};
use crate::system::storage::{load_json, save_json, KeyValueStore, StorageError, PRINT_JOBS_KEY};
use std::collections::BTreeSet;

/// Where a loaded catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Stored,
    /// Nothing usable in storage; built-in entries were used.
    Seed,
}

/// Service catalog edited on the services screen and read by the order form.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    jobs: Vec<PrintJob>,
    /// Cards showing their price. Not persisted.
    expanded: BTreeSet<usize>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(sample_print_jobs())
    }
}

impl Catalog {
    pub fn new(jobs: Vec<PrintJob>) -> Self {
        Self {
            jobs,
            expanded: BTreeSet::new(),
        }
    }

    /// Loads the stored snapshot, falling back to the built-in entries when
    /// it is missing or malformed.
    pub fn load(store: &dyn KeyValueStore) -> (Self, CatalogSource) {
        match load_json::<Vec<PrintJob>>(store, PRINT_JOBS_KEY) {
            Some(jobs) => (Self::new(jobs), CatalogSource::Stored),
            None => (Self::default(), CatalogSource::Seed),
        }
    }

    /// Stored snapshot only; an empty catalog when nothing is stored.
    pub fn load_stored(store: &dyn KeyValueStore) -> Self {
        Self::new(load_json(store, PRINT_JOBS_KEY).unwrap_or_default())
    }

    pub fn jobs(&self) -> &[PrintJob] {
        &self.jobs
    }

    pub fn available_jobs(&self) -> impl Iterator<Item = &PrintJob> {
        self.jobs.iter().filter(|job| job.available)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Title click on the services screen. Survives availability toggles.
    pub fn toggle_expanded(&mut self, index: usize) {
        if index >= self.jobs.len() {
            return;
        }
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    pub fn persist(&self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        save_json(store, PRINT_JOBS_KEY, &self.jobs)
    }

    /// Flips availability of the entry at `index` and writes the whole
    /// catalog back. Returns the new flag, or `None` for a bad index.
    pub fn toggle_availability(
        &mut self,
        index: usize,
        store: &dyn KeyValueStore,
    ) -> Result<Option<bool>, StorageError> {
        let Some(job) = self.jobs.get_mut(index) else {
            return Ok(None);
        };
        job.available = !job.available;
        let available = job.available;
        self.persist(store)?;
        Ok(Some(available))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::storage::MemoryStore;

    #[test]
    fn empty_storage_falls_back_to_seed() {
        let store = MemoryStore::new();
        let (catalog, source) = Catalog::load(&store);
        assert_eq!(source, CatalogSource::Seed);
        assert_eq!(catalog.jobs().len(), 4);
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_storage_falls_back_silently() {
        let store = MemoryStore::new();
        store.set_item(PRINT_JOBS_KEY, "[{\"title\":").unwrap();
        let (catalog, source) = Catalog::load(&store);
        assert_eq!(source, CatalogSource::Seed);
        assert_eq!(catalog, Catalog::default());
        assert!(Catalog::load_stored(&store).jobs().is_empty());
    }

    #[test]
    fn toggle_persists_entire_snapshot() {
        let store = MemoryStore::new();
        let (mut catalog, _) = Catalog::load(&store);

        assert_eq!(catalog.toggle_availability(1, &store), Ok(Some(false)));

        let (reloaded, source) = Catalog::load(&store);
        assert_eq!(source, CatalogSource::Stored);
        assert_eq!(reloaded, catalog);
        assert!(!reloaded.jobs()[1].available);
        assert_eq!(reloaded.available_jobs().count(), 3);

        let mut again = reloaded;
        assert_eq!(again.toggle_availability(1, &store), Ok(Some(true)));
        assert_eq!(Catalog::load_stored(&store).available_jobs().count(), 4);
    }

    #[test]
    fn bad_index_is_ignored() {
        let store = MemoryStore::new();
        let mut catalog = Catalog::default();
        assert_eq!(catalog.toggle_availability(99, &store), Ok(None));
        assert!(store.is_empty());
    }

    #[test]
    fn expansion_survives_availability_toggle() {
        let store = MemoryStore::new();
        let mut catalog = Catalog::default();
        catalog.toggle_expanded(1);
        catalog.toggle_expanded(99);
        assert!(catalog.is_expanded(1));
        assert!(!catalog.is_expanded(0));

        catalog.toggle_availability(1, &store).unwrap();
        catalog.toggle_availability(0, &store).unwrap();
        assert!(catalog.is_expanded(1));

        let (reloaded, _) = Catalog::load(&store);
        assert_eq!(reloaded.jobs(), catalog.jobs());
        assert!(!reloaded.is_expanded(1));

        catalog.toggle_expanded(1);
        assert!(!catalog.is_expanded(1));
    }
}
