//! Fixtures: a data directory with `pokemon.csv`, an image folder and a store path.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use pokemon_catalog::loader::RandomPlaceholders;
use pokemon_catalog::{Catalog, CatalogLoader, CatalogService, JsonFileStore, Pokemon, PokemonType};
use tempfile::TempDir;

pub const CSV: &str = "\
Name,Type1,Type2,Evolution
bulbasaur,Grass,Poison,ivysaur
ivysaur,Grass,Poison,venusaur
venusaur,Grass,Poison,
charmander,Fire,,charmeleon
charmeleon,Fire,,charizard
";

pub struct DataDir {
    pub dir: TempDir,
}

impl DataDir {
    /// Writes [`CSV`] and one empty image per entry in `images`.
    pub fn new(images: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pokemon.csv"), CSV).unwrap();
        let images_dir = dir.path().join("public").join("pokemon_images");
        fs::create_dir_all(&images_dir).unwrap();
        for image in images {
            fs::write(images_dir.join(image), b"jpg").unwrap();
        }
        DataDir { dir }
    }

    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("pokemons.json")
    }

    pub fn loader(&self) -> CatalogLoader {
        CatalogLoader::new(
            self.dir.path().join("pokemon.csv"),
            self.dir.path().join("public").join("pokemon_images"),
        )
        .with_image_base_url("https://img.test")
        .with_placeholders(Arc::new(RandomPlaceholders::seeded(11)))
    }

    pub fn service(&self) -> CatalogService<JsonFileStore> {
        CatalogService::new(JsonFileStore::new(self.store_path()), self.loader())
            .with_placeholders(Arc::new(RandomPlaceholders::seeded(12)))
    }

    /// Raw JSON of the store file.
    pub fn stored(&self) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(self.store_path()).unwrap()).unwrap()
    }
}

pub fn bulbasaur() -> Pokemon {
    Pokemon {
        id: 1,
        name: "bulbasaur".into(),
        types: vec![PokemonType::Grass, PokemonType::Poison],
        url: "u".into(),
        description: String::new(),
        height: String::new(),
        weight: String::new(),
        category: String::new(),
        abilities: String::new(),
    }
}

/// A service over a store file that already holds `catalog`.
pub fn service_with(catalog: Catalog) -> (TempDir, CatalogService<JsonFileStore>) {
    use pokemon_catalog::CatalogStore;

    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("pokemons.json"));
    store.save(&catalog).unwrap();
    let service = CatalogService::new(store, Catalog::new(Vec::new()))
        .with_placeholders(Arc::new(RandomPlaceholders::seeded(13)));
    (dir, service)
}
