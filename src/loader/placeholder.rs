//! Synthetic cosmetic fields for seeded and newly created records.
//!
//! Nothing depends on the particular values produced here; they only fill
//! `description`, `height`, `weight`, `category` and `abilities` so the
//! records look complete.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "voluptate",
    "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
];

const ADJECTIVES: &[&str] = &[
    "agile", "brave", "calm", "clever", "curious", "fierce", "gentle", "glossy", "grumpy",
    "hasty", "jolly", "lonely", "mighty", "mild", "modest", "naive", "quiet", "quirky", "rash",
    "relaxed", "sassy", "serious", "shy", "sleepy", "timid", "wild",
];

const TITLE_WORDS: &[&str] = &[
    "Blue", "Dream", "Fire", "Heart", "Highway", "Midnight", "Moon", "Night", "River", "Road",
    "Rain", "Shadow", "Sky", "Song", "Star", "Storm", "Summer", "Thunder", "Wind", "Wonder",
];

/// The cosmetic fields of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub description: String,
    pub height: String,
    pub weight: String,
    pub category: String,
    pub abilities: String,
}

/// Produces cosmetic field values.
pub trait PlaceholderSource: Send + Sync {
    fn generate(&self) -> Placeholder;
}

/// `rand`-backed generator: lorem paragraphs, `###cm` / `###kg` sizes,
/// an adjective category and a song-like ability name.
pub struct RandomPlaceholders {
    rng: Mutex<StdRng>,
}

impl RandomPlaceholders {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic generator for reproducible fixtures.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomPlaceholders {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaceholderSource for RandomPlaceholders {
    fn generate(&self) -> Placeholder {
        // A poisoned rng is still a usable rng.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Placeholder {
            description: paragraph(&mut *rng, 3),
            height: format!("{:03}cm", rng.random_range(0..1000u32)),
            weight: format!("{:03}kg", rng.random_range(0..1000u32)),
            category: pick(&mut *rng, ADJECTIVES).to_string(),
            abilities: format!("{} {}", pick(&mut *rng, TITLE_WORDS), pick(&mut *rng, TITLE_WORDS)),
        }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &'static [&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

fn paragraph<R: Rng + ?Sized>(rng: &mut R, sentences: usize) -> String {
    (0..sentences)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}

fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = rng.random_range(4..=10);
    let words: Vec<&str> = (0..count).map(|_| pick(rng, LOREM)).collect();
    let mut text = words.join(" ");
    if let Some(first) = text.get(0..1).map(str::to_uppercase) {
        text.replace_range(0..1, &first);
    }
    text.push('.');
    text
}
