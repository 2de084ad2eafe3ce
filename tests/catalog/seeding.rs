//! Lazy seeding from CSV + images.

use pokemon_catalog::{CatalogError, CatalogStore, ListQuery, LoadError};

use crate::support::DataDir;

#[test]
fn first_read_writes_the_store() {
    let data = DataDir::new(&["1.jpg", "2.jpg", "4.jpg"]);
    assert!(!data.store_path().exists());

    let all = data.service().list(&ListQuery::default()).unwrap();
    let ids: Vec<u64> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);

    let stored = data.stored();
    assert_eq!(stored["totalPokemons"], 3);
    assert_eq!(stored["data"][2]["name"], "charmander");
    assert_eq!(stored["data"][2]["types"], serde_json::json!(["fire"]));
    assert_eq!(stored["data"][2]["url"], "https://img.test/4.jpg");
}

#[test]
fn edits_survive_a_new_service() {
    let data = DataDir::new(&["1.jpg", "2.jpg"]);
    data.service().delete(1).unwrap();

    let fresh = data.service();
    let all = fresh.list(&ListQuery::default()).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, 2);
}

#[test]
fn write_before_any_read_seeds_first() {
    let data = DataDir::new(&["1.jpg"]);
    let err = data
        .service()
        .create(&serde_json::from_value(serde_json::json!({
            "name": "Bulbasaur", "id": 9, "url": "u", "types": ["grass"]
        })).unwrap())
        .unwrap_err();
    assert!(matches!(err, CatalogError::Conflict { .. }));
    assert_eq!(data.service().store().load().unwrap().unwrap().total_pokemons, 1);
}

#[test]
fn missing_images_dir_is_a_load_error() {
    let data = DataDir::new(&[]);
    std::fs::remove_dir(data.dir.path().join("public").join("pokemon_images")).unwrap();

    let err = data.service().list(&ListQuery::default()).unwrap_err();
    assert!(matches!(err, CatalogError::Load(LoadError::Io { .. })));
    assert_eq!(err.status_code(), 500);
    assert!(!data.store_path().exists());
}
