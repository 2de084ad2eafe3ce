//! Payload validation shared by create and update.
//!
//! Request bodies are decoded leniently into [`PokemonInput`] (every field
//! optional, ids as numbers or numeric strings, `null` type slots allowed)
//! and then checked in one place by [`validate`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pokemon::PokemonType;

/// An id as it arrives over the wire: `2` or `"2"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Number(serde_json::Number),
    Text(String),
}

impl IdValue {
    /// The id as a positive integer. Fractions are truncated; zero, negatives
    /// and non-numeric text yield `None`.
    pub fn parse(&self) -> Option<u64> {
        let id = match self {
            IdValue::Number(n) => match n.as_u64() {
                Some(id) => id,
                None => {
                    let f = n.as_f64()?;
                    if !f.is_finite() || f < 1.0 {
                        return None;
                    }
                    f.trunc() as u64
                }
            },
            IdValue::Text(s) => s.trim().parse::<u64>().ok()?,
        };
        (id >= 1).then_some(id)
    }
}

impl From<u64> for IdValue {
    fn from(id: u64) -> Self {
        IdValue::Number(id.into())
    }
}

/// A create or update request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonInput {
    pub name: Option<String>,
    pub id: Option<IdValue>,
    pub url: Option<String>,
    pub types: Option<Vec<Option<String>>>,
    pub description: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub abilities: Option<String>,
    pub category: Option<String>,
}

impl PokemonInput {
    /// The id if present and well-formed.
    pub fn parsed_id(&self) -> Option<u64> {
        self.id.as_ref().and_then(IdValue::parse)
    }

    /// The name if present and non-empty.
    pub fn present_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// One reason a payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required field is absent, empty, or (for `id`) not a positive integer.
    Missing(&'static str),
    /// A type name outside the fixed set.
    InvalidType(String),
    /// More than two types were given.
    TooManyTypes(usize),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Missing(field) => write!(f, "missing required field: {}", field),
            Violation::InvalidType(value) => write!(f, "invalid type: {}", value),
            Violation::TooManyTypes(n) => write!(f, "expected one or two types, got {}", n),
        }
    }
}

/// Every violation found in one payload, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn has_missing(&self) -> bool {
        self.0.iter().any(|v| matches!(v, Violation::Missing(_)))
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        f.write_str(&parts.join("; "))
    }
}

/// The required fields of a payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPokemon {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub types: Vec<PokemonType>,
}

/// Check `name`, `id`, `url` and `types`.
///
/// `null` entries in `types` are dropped before checking. What remains must
/// hold one or two names from the fixed set.
pub fn validate(input: &PokemonInput) -> Result<ValidPokemon, Violations> {
    let mut violations = Vec::new();

    let name = input.present_name();
    if name.is_none() {
        violations.push(Violation::Missing("name"));
    }
    let id = input.parsed_id();
    if id.is_none() {
        violations.push(Violation::Missing("id"));
    }
    let url = input.url.as_deref().filter(|u| !u.is_empty());
    if url.is_none() {
        violations.push(Violation::Missing("url"));
    }

    let given: Vec<&str> = input
        .types
        .iter()
        .flatten()
        .flatten()
        .map(String::as_str)
        .collect();
    let mut types = Vec::with_capacity(given.len());
    if given.is_empty() {
        violations.push(Violation::Missing("types"));
    } else if given.len() > 2 {
        violations.push(Violation::TooManyTypes(given.len()));
    }
    for value in &given {
        match value.parse::<PokemonType>() {
            Ok(t) => types.push(t),
            Err(_) => violations.push(Violation::InvalidType(value.to_string())),
        }
    }

    match (name, id, url) {
        (Some(name), Some(id), Some(url)) if violations.is_empty() => Ok(ValidPokemon {
            id,
            name: name.to_string(),
            url: url.to_string(),
            types,
        }),
        _ => Err(Violations(violations)),
    }
}
