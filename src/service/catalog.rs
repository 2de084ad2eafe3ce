//! CatalogService - list, get, create, update and delete over a `CatalogStore`.
//!
//! Every operation takes the catalog lock, loads the stored document
//! (seeding it on first use), and, for writes, saves the whole document
//! back before releasing the lock.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::CatalogError;
use super::query::{neighbour_ids, ListQuery};
use crate::loader::{self, PlaceholderSource, RandomPlaceholders, Seeder};
use crate::lock::{InMemoryLock, Lock, LockGuard};
use crate::pokemon::{Catalog, Pokemon};
use crate::store::CatalogStore;
use crate::validation::{validate, PokemonInput};

/// A record together with its wrap-around neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDetail {
    pub pokemon: Pokemon,
    pub next_pokemon: Option<Pokemon>,
    pub previous_pokemon: Option<Pokemon>,
}

/// The catalog service.
///
/// Generic over `S`, the store. The seeder runs at most once, the first
/// time an operation finds the store empty.
pub struct CatalogService<S> {
    store: S,
    seeder: Box<dyn Seeder>,
    placeholders: Arc<dyn PlaceholderSource>,
    lock: Box<dyn Lock>,
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: S, seeder: impl Seeder + 'static) -> Self {
        Self {
            store,
            seeder: Box::new(seeder),
            placeholders: Arc::new(RandomPlaceholders::new()),
            lock: Box::new(InMemoryLock::new()),
        }
    }

    /// Generator for the cosmetic fields of created records.
    pub fn with_placeholders(mut self, placeholders: Arc<dyn PlaceholderSource>) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Replace the default in-process lock.
    pub fn with_lock(mut self, lock: impl Lock + 'static) -> Self {
        self.lock = Box::new(lock);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn guard(&self) -> Result<LockGuard<'_, dyn Lock>, CatalogError> {
        self.lock.lock()?;
        Ok(LockGuard::held(self.lock.as_ref()))
    }

    /// Must be called with the lock held.
    fn snapshot(&self) -> Result<Catalog, CatalogError> {
        Ok(loader::ensure_store(&self.store, self.seeder.as_ref())?)
    }

    fn commit(&self, catalog: &mut Catalog) -> Result<(), CatalogError> {
        catalog.sync_total();
        self.store.save(catalog)?;
        Ok(())
    }

    /// The whole stored catalog, seeding it if needed.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        let _guard = self.guard()?;
        self.snapshot()
    }

    pub fn list(&self, query: &ListQuery) -> Result<Vec<Pokemon>, CatalogError> {
        let _guard = self.guard()?;
        let catalog = self.snapshot()?;
        let matched = query.paginate(query.filter(&catalog.data));
        debug!(?query, returned = matched.len(), "list");
        Ok(matched.into_iter().cloned().collect())
    }

    /// Neighbours are looked up by id arithmetic over the total store length,
    /// so either may be `None` when ids have gaps.
    pub fn get(&self, id: u64) -> Result<PokemonDetail, CatalogError> {
        let _guard = self.guard()?;
        let catalog = self.snapshot()?;
        let pokemon = catalog
            .find(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        let (previous, next) = neighbour_ids(id, catalog.data.len());
        Ok(PokemonDetail {
            pokemon,
            next_pokemon: catalog.find(next).cloned(),
            previous_pokemon: catalog.find(previous).cloned(),
        })
    }

    /// Append a new record. The name is stored lowercase and the cosmetic
    /// fields are synthesized.
    pub fn create(&self, input: &PokemonInput) -> Result<Pokemon, CatalogError> {
        let valid = validate(input)?;

        let _guard = self.guard()?;
        let mut catalog = self.snapshot()?;
        if catalog.find_by_name(&valid.name).is_some() || catalog.find(valid.id).is_some() {
            return Err(CatalogError::Conflict {
                id: valid.id,
                name: valid.name,
            });
        }

        let placeholder = self.placeholders.generate();
        let record = Pokemon {
            id: valid.id,
            name: valid.name.to_lowercase(),
            types: valid.types,
            url: valid.url,
            description: placeholder.description,
            height: placeholder.height,
            weight: placeholder.weight,
            category: placeholder.category,
            abilities: placeholder.abilities,
        };
        catalog.data.push(record.clone());
        self.commit(&mut catalog)?;

        info!(id = record.id, name = %record.name, "pokemon created");
        Ok(record)
    }

    /// Replace an existing record in place.
    ///
    /// The target must match the payload's id or (case-insensitively) its
    /// name; that is checked before the payload itself is validated. The
    /// record at the matching id is replaced, or the record with the
    /// matching name when no id matches. Omitted cosmetic fields keep their
    /// stored values.
    pub fn update(&self, input: &PokemonInput) -> Result<Pokemon, CatalogError> {
        let _guard = self.guard()?;
        let mut catalog = self.snapshot()?;

        let id = input.parsed_id();
        let name = input.present_name();
        let exists = id.is_some_and(|id| catalog.find(id).is_some())
            || name.is_some_and(|name| catalog.find_by_name(name).is_some());
        if !exists {
            return Err(CatalogError::NotExisting {
                id,
                name: name.map(str::to_string),
            });
        }

        let valid = validate(input)?;
        let index = catalog
            .position(valid.id)
            .or_else(|| catalog.data.iter().position(|p| p.name_matches(&valid.name)))
            .ok_or_else(|| CatalogError::NotExisting {
                id: Some(valid.id),
                name: Some(valid.name.clone()),
            })?;

        let existing = &catalog.data[index];
        let keep = |given: &Option<String>, stored: &String| {
            given.clone().unwrap_or_else(|| stored.clone())
        };
        let record = Pokemon {
            id: valid.id,
            name: valid.name,
            types: valid.types,
            url: valid.url,
            description: keep(&input.description, &existing.description),
            height: keep(&input.height, &existing.height),
            weight: keep(&input.weight, &existing.weight),
            category: keep(&input.category, &existing.category),
            abilities: keep(&input.abilities, &existing.abilities),
        };
        catalog.data[index] = record.clone();
        self.commit(&mut catalog)?;

        info!(id = record.id, position = index, "pokemon updated");
        Ok(record)
    }

    /// Remove the record with `id`. Remaining ids are not renumbered.
    pub fn delete(&self, id: u64) -> Result<Pokemon, CatalogError> {
        let _guard = self.guard()?;
        let mut catalog = self.snapshot()?;
        let index = catalog
            .position(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        let removed = catalog.data.remove(index);
        self.commit(&mut catalog)?;

        info!(id, name = %removed.name, "pokemon deleted");
        Ok(removed)
    }
}
