//! Catalog loader - seeds an empty store from a CSV file and an image directory.
//!
//! Each CSV row at 1-based position `n` becomes record `n` if, and only if,
//! the image directory holds a file whose stem (text before the first `.`)
//! is `n`. Rows without an image are dropped; the ids of the remaining rows
//! are their CSV positions, so a missing image leaves a gap rather than
//! shifting later ids.
//!
//! ## Example
//!
//! ```ignore
//! use pokemon_catalog::{loader, CatalogLoader, JsonFileStore};
//!
//! let store = JsonFileStore::new("pokemons.json");
//! let seeder = CatalogLoader::new("pokemon.csv", "public/pokemon_images");
//! let catalog = loader::ensure_store(&store, &seeder)?;
//! ```

mod error;
mod placeholder;

pub use error::LoadError;
pub use placeholder::{Placeholder, PlaceholderSource, RandomPlaceholders};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::pokemon::{Catalog, Pokemon, PokemonType};
use crate::store::CatalogStore;

/// Produces the initial record list for an empty store.
pub trait Seeder: Send + Sync {
    fn seed(&self) -> Result<Vec<Pokemon>, LoadError>;
}

/// A fixed catalog seeds with its own records.
impl Seeder for Catalog {
    fn seed(&self) -> Result<Vec<Pokemon>, LoadError> {
        Ok(self.data.clone())
    }
}

/// Build the catalog from `seeder` and overwrite whatever `store` holds.
pub fn seed_store<S, D>(store: &S, seeder: &D) -> Result<Catalog, LoadError>
where
    S: CatalogStore + ?Sized,
    D: Seeder + ?Sized,
{
    let catalog = Catalog::new(seeder.seed()?);
    store.save(&catalog)?;
    info!(total = catalog.total_pokemons, "catalog seeded");
    Ok(catalog)
}

/// Return the stored catalog, seeding it first if nothing is stored.
///
/// Not synchronized on its own; callers that may race hold the catalog lock.
pub fn ensure_store<S, D>(store: &S, seeder: &D) -> Result<Catalog, LoadError>
where
    S: CatalogStore + ?Sized,
    D: Seeder + ?Sized,
{
    match store.load()? {
        Some(catalog) => Ok(catalog),
        None => seed_store(store, seeder),
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type1")]
    type1: String,
    #[serde(rename = "Type2", default)]
    type2: Option<String>,
}

/// Joins `pokemon.csv`-style rows with the images that exist for them.
pub struct CatalogLoader {
    csv_path: PathBuf,
    images_dir: PathBuf,
    image_base_url: String,
    placeholders: Arc<dyn PlaceholderSource>,
}

impl CatalogLoader {
    pub fn new(csv_path: impl Into<PathBuf>, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            images_dir: images_dir.into(),
            image_base_url: "/pokemon_images".to_string(),
            placeholders: Arc::new(RandomPlaceholders::new()),
        }
    }

    /// Prefix for record urls; each record gets `{base}/{id}.jpg`.
    pub fn with_image_base_url(mut self, base: impl Into<String>) -> Self {
        self.image_base_url = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_placeholders(mut self, placeholders: Arc<dyn PlaceholderSource>) -> Self {
        self.placeholders = placeholders;
        self
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Stems of every file in the image directory.
    fn asset_ids(&self) -> Result<HashSet<String>, LoadError> {
        let io_error = |e: std::io::Error| LoadError::Io {
            path: self.images_dir.clone(),
            message: e.to_string(),
        };
        let mut ids = HashSet::new();
        for entry in fs::read_dir(&self.images_dir).map_err(io_error)? {
            let name = entry.map_err(io_error)?.file_name();
            let name = name.to_string_lossy();
            if let Some(stem) = name.split('.').next() {
                ids.insert(stem.to_string());
            }
        }
        Ok(ids)
    }

    fn read_rows(&self) -> Result<Vec<CsvRow>, LoadError> {
        let csv_error = |e: csv::Error| {
            let path = self.csv_path.clone();
            let message = e.to_string();
            if e.is_io_error() {
                LoadError::Io { path, message }
            } else {
                LoadError::Csv { path, message }
            }
        };
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.csv_path)
            .map_err(csv_error)?;
        reader
            .deserialize::<CsvRow>()
            .map(|row| row.map_err(csv_error))
            .collect()
    }

    fn record(&self, id: u64, row: CsvRow) -> Result<Pokemon, LoadError> {
        let parse = |value: &str| {
            let value = value.to_lowercase();
            value
                .parse::<PokemonType>()
                .map_err(|_| LoadError::UnknownType {
                    row: id as usize,
                    value,
                })
        };
        let mut types = vec![parse(&row.type1)?];
        if let Some(second) = row.type2.as_deref().filter(|t| !t.is_empty()) {
            types.push(parse(second)?);
        }

        let placeholder = self.placeholders.generate();
        Ok(Pokemon {
            id,
            name: row.name,
            types,
            url: format!("{}/{}.jpg", self.image_base_url, id),
            description: placeholder.description,
            height: placeholder.height,
            weight: placeholder.weight,
            category: placeholder.category,
            abilities: placeholder.abilities,
        })
    }
}

impl Seeder for CatalogLoader {
    fn seed(&self) -> Result<Vec<Pokemon>, LoadError> {
        let rows = self.read_rows()?;
        let assets = self.asset_ids()?;
        debug!(rows = rows.len(), images = assets.len(), "joining csv rows with images");

        let mut records = Vec::with_capacity(assets.len().min(rows.len()));
        for (index, row) in rows.into_iter().enumerate() {
            let id = index as u64 + 1;
            if assets.contains(&id.to_string()) {
                records.push(self.record(id, row)?);
            }
        }
        Ok(records)
    }
}
