//! Persistent user catalog.
//!
//! The whole collection lives under one localStorage key as a JSON array.
//! Every mutation reads the array, changes it and writes it back before
//! returning; there is a single writer (the current tab), so there is no
//! batching and no concurrency check.

use crate::shared::storage::{KeyValueStorage, StorageError};
use contracts::domain::a001_game_card::aggregate::{CatalogEntry, GameCard, GameCardId};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog entry {0} not found")]
    NotFound(GameCardId),

    #[error("index {index} is out of range for a catalog of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// On-disk shape. Arrays written before ids existed have no `id` field.
#[derive(Deserialize)]
struct StoredRecord {
    #[serde(default)]
    id: Option<GameCardId>,
    #[serde(flatten)]
    entry: CatalogEntry,
}

/// Parse a stored array record by record.
///
/// Records that do not decode are logged and skipped; the rest survive. A
/// record without an id gets one derived from its slot, so repeated reads of
/// the same array agree even when the id was never written back. The flag
/// reports whether any such id was assigned.
fn parse_records(key: &str, raw: &str) -> Result<(Vec<GameCard>, bool), serde_json::Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let mut assigned = false;
    let mut cards = Vec::with_capacity(values.len());
    for (position, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<StoredRecord>(value) {
            Ok(StoredRecord { id: Some(id), entry }) => cards.push(GameCard { id, entry }),
            Ok(StoredRecord { id: None, entry }) => {
                assigned = true;
                cards.push(GameCard {
                    id: GameCardId::for_legacy_slot(key, position),
                    entry,
                });
            }
            Err(e) => log::warn!(
                "Catalog '{}': skipping stored record {}: {}",
                key,
                position,
                e
            ),
        }
    }
    Ok((cards, assigned))
}

#[derive(Clone, Debug)]
pub struct CatalogStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> CatalogStore<S> {
    /// Open the catalog under `key`, creating an empty one if the key is absent.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let store = Self {
            storage,
            key: key.into(),
        };
        store.ensure_initialized();
        store
    }

    fn ensure_initialized(&self) {
        let Some(raw) = self.storage.get_item(&self.key) else {
            log::debug!("Catalog '{}' not found, initializing empty", self.key);
            if let Err(e) = self.storage.set_item(&self.key, "[]") {
                log::warn!("Failed to initialize catalog '{}': {}", self.key, e);
            }
            return;
        };

        match parse_records(&self.key, &raw) {
            Ok((cards, true)) => {
                log::info!(
                    "Catalog '{}': assigning ids to {} stored entries",
                    self.key,
                    cards.len()
                );
                // Reads keep deriving the same ids until a write succeeds.
                if let Err(e) = self.write(&cards) {
                    log::warn!("Failed to persist catalog ids: {}", e);
                }
            }
            Ok(_) => {}
            // Left as is; the next successful mutation replaces it.
            Err(e) => log::warn!(
                "Catalog '{}' holds malformed data, treating it as empty: {}",
                self.key,
                e
            ),
        }
    }

    fn read(&self) -> Vec<GameCard> {
        let Some(raw) = self.storage.get_item(&self.key) else {
            return Vec::new();
        };
        match parse_records(&self.key, &raw) {
            Ok((cards, _)) => cards,
            Err(e) => {
                log::warn!("Catalog '{}' is malformed: {}", self.key, e);
                Vec::new()
            }
        }
    }

    fn write(&self, cards: &[GameCard]) -> Result<(), CatalogError> {
        let json = serde_json::to_string(cards)?;
        self.storage.set_item(&self.key, &json)?;
        Ok(())
    }

    /// Full collection in storage order; empty when absent or corrupt.
    pub fn get_all(&self) -> Vec<GameCard> {
        self.read()
    }

    pub fn get(&self, id: GameCardId) -> Option<GameCard> {
        self.read().into_iter().find(|c| c.id == id)
    }

    pub fn position_of(&self, id: GameCardId) -> Option<usize> {
        self.read().iter().position(|c| c.id == id)
    }

    pub fn append(&self, entry: CatalogEntry) -> Result<GameCardId, CatalogError> {
        let mut cards = self.read();
        let card = GameCard::new_for_insert(entry);
        let id = card.id;
        cards.push(card);
        self.write(&cards)?;
        log::debug!("Catalog '{}': appended {} ({} total)", self.key, id, cards.len());
        Ok(id)
    }

    /// Overwrite the entry at `index`, keeping the id that position had.
    pub fn replace_at(&self, index: usize, entry: CatalogEntry) -> Result<GameCardId, CatalogError> {
        let mut cards = self.read();
        let len = cards.len();
        let card = cards
            .get_mut(index)
            .ok_or(CatalogError::IndexOutOfRange { index, len })?;
        card.entry = entry;
        let id = card.id;
        self.write(&cards)?;
        log::debug!("Catalog '{}': replaced index {}", self.key, index);
        Ok(id)
    }

    /// Remove the entry at `index`; later entries shift down by one.
    pub fn remove_at(&self, index: usize) -> Result<GameCard, CatalogError> {
        let mut cards = self.read();
        let len = cards.len();
        if index >= len {
            return Err(CatalogError::IndexOutOfRange { index, len });
        }
        let removed = cards.remove(index);
        self.write(&cards)?;
        log::debug!("Catalog '{}': removed index {}", self.key, index);
        Ok(removed)
    }

    /// Replace by id. Returns the position the entry occupies.
    pub fn replace(&self, id: GameCardId, entry: CatalogEntry) -> Result<usize, CatalogError> {
        let index = self.position_of(id).ok_or(CatalogError::NotFound(id))?;
        self.replace_at(index, entry)?;
        Ok(index)
    }

    pub fn remove(&self, id: GameCardId) -> Result<GameCard, CatalogError> {
        let index = self.position_of(id).ok_or(CatalogError::NotFound(id))?;
        self.remove_at(index)
    }
}
