//! Catalog storage - load and save the whole [`Catalog`](crate::Catalog) document.
//!
//! The service never touches files directly. It talks to a `CatalogStore`,
//! which hands back the full document (or `None` when nothing has been
//! stored yet) and accepts a full replacement on save.
//!
//! ## Example
//!
//! ```ignore
//! use pokemon_catalog::{CatalogStore, JsonFileStore};
//!
//! let store = JsonFileStore::new("data/pokemons.json");
//! if let Some(catalog) = store.load()? {
//!     println!("{} records", catalog.total_pokemons);
//! }
//! ```

mod error;
mod in_memory;
mod json_file;

pub use error::StoreError;
pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;

use crate::pokemon::Catalog;

/// Whole-document storage for the catalog.
pub trait CatalogStore: Send + Sync {
    /// Read the stored catalog. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<Catalog>, StoreError>;

    /// Replace the stored catalog.
    fn save(&self, catalog: &Catalog) -> Result<(), StoreError>;
}

impl<S: CatalogStore + ?Sized> CatalogStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<Catalog>, StoreError> {
        (**self).load()
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        (**self).save(catalog)
    }
}
