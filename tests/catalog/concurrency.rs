//! Concurrent callers share one store without losing writes.

use std::sync::Arc;
use std::thread;

use pokemon_catalog::{CatalogStore, ListQuery, PokemonInput};
use serde_json::json;

use crate::support::DataDir;

#[test]
fn concurrent_first_reads_seed_once() {
    let data = DataDir::new(&["1.jpg", "2.jpg", "3.jpg"]);
    let service = Arc::new(data.service());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            thread::spawn(move || service.list(&ListQuery::default()).unwrap().len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 3);
    }
}

#[test]
fn concurrent_creates_are_all_kept() {
    let data = DataDir::new(&["1.jpg"]);
    let service = Arc::new(data.service());

    let handles: Vec<_> = (0..16u64)
        .map(|i| {
            let service = service.clone();
            thread::spawn(move || {
                let input: PokemonInput = serde_json::from_value(json!({
                    "name": format!("mon{i}"),
                    "id": 100 + i,
                    "url": "u",
                    "types": ["normal"]
                }))
                .unwrap();
                service.create(&input).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stored = service.store().load().unwrap().unwrap();
    assert_eq!(stored.total_pokemons, 17);
}
