//! List filtering, pagination and neighbour arithmetic.

use serde::{Deserialize, Serialize};

use crate::pokemon::Pokemon;

/// Query string for the list operation. Values stay raw strings so that
/// malformed numbers degrade instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl ListQuery {
    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page.to_string());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit.to_string());
        self
    }

    pub fn search(mut self, name: impl Into<String>) -> Self {
        self.search = Some(name.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Type filter first, then the case-insensitive exact name match.
    pub fn filter<'a>(&self, records: &'a [Pokemon]) -> Vec<&'a Pokemon> {
        let kind = self.kind.as_deref().filter(|k| !k.is_empty());
        let search = self.search.as_deref().filter(|s| !s.is_empty());
        records
            .iter()
            .filter(|p| kind.map_or(true, |k| p.has_type(k)))
            .filter(|p| search.map_or(true, |s| p.name_matches(s)))
            .collect()
    }

    /// Apply `page`/`limit` to an already filtered sequence.
    pub fn paginate<T>(&self, items: Vec<T>) -> Vec<T> {
        let Some(limit) = parse_count(self.limit.as_deref()) else {
            return items;
        };
        let page = parse_count(self.page.as_deref()).unwrap_or(1);
        let (start, end) = page_bounds(page, limit, items.len());
        items.into_iter().skip(start).take(end - start).collect()
    }
}

fn parse_count(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
}

/// `[limit*(page-1), limit*page)` clamped to `[0, len]`. Page 0 is empty.
pub fn page_bounds(page: usize, limit: usize, len: usize) -> (usize, usize) {
    if page == 0 {
        return (0, 0);
    }
    let start = limit.saturating_mul(page - 1).min(len);
    let end = limit.saturating_mul(page).min(len);
    (start, end)
}

/// Wrap-around neighbours of `id` in a store of `len` records:
/// `(previous, next)`.
pub fn neighbour_ids(id: u64, len: usize) -> (u64, u64) {
    let len = len as u64;
    let previous = if id == 1 { len } else { id.saturating_sub(1) };
    let next = if id == len { 1 } else { id.saturating_add(1) };
    (previous, next)
}
