//! InMemoryStore - RwLock-backed catalog store for testing and development.

use std::sync::{Arc, RwLock};

use super::{CatalogStore, StoreError};
use crate::pokemon::Catalog;

/// In-memory catalog store. Clone-friendly via Arc; clones share state.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    catalog: Arc<RwLock<Option<Catalog>>>,
}

impl InMemoryStore {
    /// Create an empty store (`load` returns `None` until the first save).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `catalog`.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Some(catalog))),
        }
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Option<Catalog>, StoreError> {
        let catalog = self
            .catalog
            .read()
            .map_err(|_| StoreError::LockPoisoned("load"))?;
        Ok(catalog.clone())
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let mut stored = self
            .catalog
            .write()
            .map_err(|_| StoreError::LockPoisoned("save"))?;
        let mut catalog = catalog.clone();
        catalog.sync_total();
        *stored = Some(catalog);
        Ok(())
    }
}
