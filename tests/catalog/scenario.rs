//! End-to-end behaviour of the service over a JSON file store.

use pokemon_catalog::{Catalog, CatalogError, CatalogStore, ListQuery, PokemonInput, PokemonType};
use serde_json::json;

use crate::support::{bulbasaur, service_with};

fn input(value: serde_json::Value) -> PokemonInput {
    serde_json::from_value(value).unwrap()
}

#[test]
fn create_list_delete_get() {
    let (_dir, service) = service_with(Catalog::new(vec![bulbasaur()]));

    service
        .create(&input(json!({
            "name": "ivysaur", "id": 2, "url": "u2", "types": ["grass", "poison"]
        })))
        .unwrap();
    assert_eq!(service.store().load().unwrap().unwrap().total_pokemons, 2);

    let poison = service.list(&ListQuery::default().kind("poison")).unwrap();
    let ids: Vec<u64> = poison.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);

    service.delete(2).unwrap();
    assert_eq!(service.store().load().unwrap().unwrap().total_pokemons, 1);

    let err = service.get(2).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn created_record_reads_back() {
    let (_dir, service) = service_with(Catalog::new(vec![bulbasaur()]));
    service
        .create(&input(json!({
            "name": "squirtle", "id": 7, "url": "u7", "types": ["water"]
        })))
        .unwrap();

    let detail = service.get(7).unwrap();
    assert_eq!(detail.pokemon.name, "squirtle");
    assert_eq!(detail.pokemon.url, "u7");
    assert_eq!(detail.pokemon.types, vec![PokemonType::Water]);
}

#[test]
fn invalid_type_never_mutates() {
    let (_dir, service) = service_with(Catalog::new(vec![bulbasaur()]));
    let before = service.store().load().unwrap();

    for types in [json!(["shadow"]), json!(["grass", "Poison"]), json!(["fire", "ice", "rock"])] {
        let err = service
            .create(&input(json!({ "name": "x", "id": 3, "url": "u", "types": types })))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(err.status_code(), 401);
    }
    assert_eq!(service.store().load().unwrap(), before);
}

#[test]
fn duplicate_never_mutates() {
    let (_dir, service) = service_with(Catalog::new(vec![bulbasaur()]));
    let before = service.store().load().unwrap();

    let err = service
        .create(&input(json!({ "name": "x", "id": "1", "url": "u", "types": ["ice"] })))
        .unwrap_err();
    assert_eq!(err.message(), "Pokémon is existing");
    assert_eq!(service.store().load().unwrap(), before);
}

#[test]
fn pages_stay_within_limit() {
    let records = (1..=23)
        .map(|id| {
            let mut p = bulbasaur();
            p.id = id;
            p.name = format!("mon{id}");
            p
        })
        .collect();
    let (_dir, service) = service_with(Catalog::new(records));

    let mut seen = Vec::new();
    for page in 1..=4 {
        let chunk = service.list(&ListQuery::default().page(page).limit(10)).unwrap();
        assert!(chunk.len() <= 10);
        seen.extend(chunk.into_iter().map(|p| p.id));
    }
    assert_eq!(seen, (1..=23).collect::<Vec<u64>>());
}

#[test]
fn first_record_wraps_to_last() {
    let records = (1..=5)
        .map(|id| {
            let mut p = bulbasaur();
            p.id = id;
            p.name = format!("mon{id}");
            p
        })
        .collect();
    let (_dir, service) = service_with(Catalog::new(records));

    let detail = service.get(1).unwrap();
    assert_eq!(detail.previous_pokemon.map(|p| p.id), Some(5));
    assert_eq!(detail.next_pokemon.map(|p| p.id), Some(2));
}

#[test]
fn existing_empty_store_is_not_reseeded() {
    let (_dir, service) = service_with(Catalog::new(Vec::new()));
    assert!(service.list(&ListQuery::default()).unwrap().is_empty());
}
