//! Built-in read-only dataset shown by "Load Local".
//!
//! Seeded into localStorage once; never merged with the user catalog.

use crate::shared::storage::KeyValueStorage;
use contracts::domain::a001_game_card::aggregate::CatalogEntry;

pub fn default_local_data() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            title: "Kingdom Come: Deliverance II".into(),
            img: "images/kcd2.jpg".into(),
            alt: "Henry riding a horse through medieval Bohemia.".into(),
            genre: "Action RPG".into(),
            desc: "Immersive historical RPG set in 1403 Bohemia. A masterful blend of realism and narrative-driven storytelling.".into(),
            rating: "★★★★★".into(),
            link: "https://www.kingdomcomerpg.com/".into(),
        },
        CatalogEntry {
            title: "Cyberpunk 2077".into(),
            img: "images/cp2077.jpg".into(),
            alt: "V looking over Night City at sunset.".into(),
            genre: "Action RPG".into(),
            desc: "A dystopian open-world adventure with strong gameplay, emotional storytelling, and breathtaking worldbuilding.".into(),
            rating: "★★★★★".into(),
            link: "https://www.cyberpunk.net/".into(),
        },
    ]
}

/// Write the default dataset under `key` unless something is already there.
pub fn seed_local_data<S: KeyValueStorage>(storage: &S, key: &str) {
    if storage.get_item(key).is_some() {
        return;
    }
    match serde_json::to_string(&default_local_data()) {
        Ok(json) => {
            if let Err(e) = storage.set_item(key, &json) {
                log::warn!("Failed to seed '{}': {}", key, e);
            }
        }
        Err(e) => log::error!("Failed to serialize default dataset: {}", e),
    }
}

/// Stored default dataset; empty when absent or malformed.
pub fn load_local_data<S: KeyValueStorage>(storage: &S, key: &str) -> Vec<CatalogEntry> {
    let Some(raw) = storage.get_item(key) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Dataset '{}' is malformed: {}", key, e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn test_seed_once() {
        let storage = MemoryStorage::new();
        seed_local_data(&storage, "gameDataLocal");
        assert_eq!(load_local_data(&storage, "gameDataLocal"), default_local_data());

        storage.set_item("gameDataLocal", "[]").unwrap();
        seed_local_data(&storage, "gameDataLocal");
        assert!(load_local_data(&storage, "gameDataLocal").is_empty());
    }

    #[test]
    fn test_malformed_dataset_is_empty() {
        let storage = MemoryStorage::new();
        storage.set_item("gameDataLocal", "oops").unwrap();
        assert!(load_local_data(&storage, "gameDataLocal").is_empty());
        assert!(load_local_data(&storage, "missing").is_empty());
    }
}
