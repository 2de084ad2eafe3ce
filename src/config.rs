//! Runtime configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `PORT` | `8000` |
//! | `POKEMON_DATA_DIR` | `.` |
//! | `POKEMON_STORE_PATH` | `<data dir>/pokemons.json` |
//! | `POKEMON_CSV_PATH` | `<data dir>/pokemon.csv` |
//! | `POKEMON_IMAGES_DIR` | `<data dir>/public/pokemon_images` |
//! | `POKEMON_IMAGE_BASE_URL` | `/pokemon_images` |

use std::fmt;
use std::path::PathBuf;

use crate::loader::CatalogLoader;
use crate::store::JsonFileStore;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => write!(f, "invalid PORT value: {:?}", value),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub store_path: PathBuf,
    pub csv_path: PathBuf,
    pub images_dir: PathBuf,
    pub image_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };
        let data_dir = get("POKEMON_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Config {
            port,
            store_path: get("POKEMON_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join("pokemons.json")),
            csv_path: get("POKEMON_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join("pokemon.csv")),
            images_dir: get("POKEMON_IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join("public").join("pokemon_images")),
            image_base_url: get("POKEMON_IMAGE_BASE_URL")
                .unwrap_or_else(|| "/pokemon_images".to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.store_path)
    }

    pub fn loader(&self) -> CatalogLoader {
        CatalogLoader::new(&self.csv_path, &self.images_dir)
            .with_image_base_url(self.image_base_url.clone())
    }
}
