//! Catalog data model: `Pokemon` records, the fixed `PokemonType` set, and
//! the `Catalog` document persisted by a [`CatalogStore`](crate::CatalogStore).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of types a record may carry.
///
/// Serialized lowercase (`"grass"`, `"poison"`, ...) to match the stored
/// document and the HTTP payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Bug,
    Dragon,
    Fairy,
    Fire,
    Ghost,
    Ground,
    Normal,
    Psychic,
    Steel,
    Dark,
    Electric,
    Fighting,
    Flying,
    Grass,
    Ice,
    Poison,
    Rock,
    Water,
}

impl PokemonType {
    pub const ALL: [PokemonType; 18] = [
        PokemonType::Bug,
        PokemonType::Dragon,
        PokemonType::Fairy,
        PokemonType::Fire,
        PokemonType::Ghost,
        PokemonType::Ground,
        PokemonType::Normal,
        PokemonType::Psychic,
        PokemonType::Steel,
        PokemonType::Dark,
        PokemonType::Electric,
        PokemonType::Fighting,
        PokemonType::Flying,
        PokemonType::Grass,
        PokemonType::Ice,
        PokemonType::Poison,
        PokemonType::Rock,
        PokemonType::Water,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PokemonType::Bug => "bug",
            PokemonType::Dragon => "dragon",
            PokemonType::Fairy => "fairy",
            PokemonType::Fire => "fire",
            PokemonType::Ghost => "ghost",
            PokemonType::Ground => "ground",
            PokemonType::Normal => "normal",
            PokemonType::Psychic => "psychic",
            PokemonType::Steel => "steel",
            PokemonType::Dark => "dark",
            PokemonType::Electric => "electric",
            PokemonType::Fighting => "fighting",
            PokemonType::Flying => "flying",
            PokemonType::Grass => "grass",
            PokemonType::Ice => "ice",
            PokemonType::Poison => "poison",
            PokemonType::Rock => "rock",
            PokemonType::Water => "water",
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known type names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownType(pub String);

impl fmt::Display for UnknownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown pokemon type: {}", self.0)
    }
}

impl std::error::Error for UnknownType {}

impl FromStr for PokemonType {
    type Err = UnknownType;

    /// Exact, case-sensitive match against the lowercase names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PokemonType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownType(s.to_string()))
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u64,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub abilities: String,
}

impl Pokemon {
    pub fn has_type(&self, name: &str) -> bool {
        self.types.iter().any(|t| t.as_str() == name)
    }

    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// The persisted document: every record plus a cached count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub data: Vec<Pokemon>,
    #[serde(rename = "totalPokemons", default)]
    pub total_pokemons: usize,
}

impl Catalog {
    pub fn new(data: Vec<Pokemon>) -> Self {
        let total_pokemons = data.len();
        Self {
            data,
            total_pokemons,
        }
    }

    pub fn find(&self, id: u64) -> Option<&Pokemon> {
        self.data.iter().find(|p| p.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Pokemon> {
        self.data.iter().find(|p| p.name_matches(name))
    }

    pub fn position(&self, id: u64) -> Option<usize> {
        self.data.iter().position(|p| p.id == id)
    }

    /// Recompute `total_pokemons` from `data`. Called before every save.
    pub fn sync_total(&mut self) {
        self.total_pokemons = self.data.len();
    }
}
