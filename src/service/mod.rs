//! Catalog service: the operations behind the `/pokemons` endpoints.
//!
//! `CatalogService<S>` wraps a [`CatalogStore`](crate::CatalogStore) and a
//! [`Seeder`](crate::loader::Seeder). Operations are synchronous and
//! serialized by a single in-process lock around each load/modify/save cycle.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pokemon_catalog::{CatalogLoader, CatalogService, JsonFileStore, ListQuery};
//!
//! let service = CatalogService::new(
//!     JsonFileStore::new("pokemons.json"),
//!     CatalogLoader::new("pokemon.csv", "public/pokemon_images"),
//! );
//!
//! let poison = service.list(&ListQuery::default().kind("poison").page(1).limit(20))?;
//! let detail = service.get(1)?;
//! ```

mod catalog;
mod error;
mod query;

pub use catalog::{CatalogService, PokemonDetail};
pub use error::{
    CatalogError, ALREADY_EXISTS, INVALID_TYPE, MISSING_VALUE, NOT_EXISTING, NO_SUCH_POKEMON,
};
pub use query::{neighbour_ids, page_bounds, ListQuery};

/// Parse a path segment such as `"25"` into a record id.
///
/// Anything that is not a positive integer cannot name a record, so it is
/// reported as not found.
pub fn parse_id(raw: &str) -> Result<u64, CatalogError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| CatalogError::NotFound(raw.to_string()))
}
