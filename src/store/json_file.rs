//! JsonFileStore - the catalog as one JSON document on disk.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{CatalogStore, StoreError};
use crate::pokemon::Catalog;

/// Stores the catalog at a fixed path as `{"data": [...], "totalPokemons": n}`.
///
/// A missing or blank file counts as "nothing stored". Saves go through a
/// temporary file in the same directory that is renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> Result<Option<Catalog>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let catalog: Catalog = serde_json::from_str(&raw)?;
        Ok(Some(catalog))
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let mut catalog = catalog.clone();
        catalog.sync_total();
        let bytes = serde_json::to_vec(&catalog)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.io_error(e))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(&bytes).map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        debug!(path = %self.path.display(), total = catalog.total_pokemons, "catalog saved");
        Ok(())
    }
}
