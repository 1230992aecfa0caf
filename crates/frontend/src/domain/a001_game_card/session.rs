//! Edit session over the user catalog.
//!
//! `Idle` submits append a new card, `Editing(id)` submits replace that card
//! in place. The controller also keeps the records last read from the store;
//! the list is always re-projected from them after a mutation.

use super::storage::{CatalogError, CatalogStore};
use crate::shared::storage::KeyValueStorage;
use contracts::domain::a001_game_card::aggregate::{GameCard, GameCardDto, GameCardId};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(GameCardId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(GameCardId),
    Updated { id: GameCardId, index: usize },
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Clone, Debug)]
pub struct CatalogController<S> {
    store: CatalogStore<S>,
    placeholder_img: String,
    session: EditSession,
    form: GameCardDto,
    records: Vec<GameCard>,
}

impl<S: KeyValueStorage> CatalogController<S> {
    pub fn new(store: CatalogStore<S>, placeholder_img: impl Into<String>) -> Self {
        let records = store.get_all();
        Self {
            store,
            placeholder_img: placeholder_img.into(),
            session: EditSession::Idle,
            form: GameCardDto::default(),
            records,
        }
    }

    pub fn session(&self) -> EditSession {
        self.session
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.session, EditSession::Editing(_))
    }

    pub fn form(&self) -> &GameCardDto {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut GameCardDto {
        &mut self.form
    }

    pub fn records(&self) -> &[GameCard] {
        &self.records
    }

    pub fn store(&self) -> &CatalogStore<S> {
        &self.store
    }

    /// Re-read the store
    pub fn refresh(&mut self) {
        self.records = self.store.get_all();
    }

    /// Value of the hidden edit-index marker: current position of the edited
    /// card, or an empty string when creating.
    pub fn edit_index(&self) -> String {
        match self.session {
            EditSession::Idle => String::new(),
            EditSession::Editing(id) => self
                .records
                .iter()
                .position(|c| c.id == id)
                .map(|i| i.to_string())
                .unwrap_or_default(),
        }
    }

    /// Prefill the form from `id` and start editing it. Retargets an edit
    /// already in progress.
    pub fn begin_edit(&mut self, id: GameCardId) -> Result<(), CatalogError> {
        let card = self.store.get(id).ok_or(CatalogError::NotFound(id))?;
        self.form = GameCardDto::from_entry(&card.entry);
        self.session = EditSession::Editing(id);
        log::debug!("Editing {}", id);
        Ok(())
    }

    /// Back to `Idle` without touching the store.
    pub fn cancel_edit(&mut self) {
        self.form = GameCardDto::default();
        self.session = EditSession::Idle;
    }

    /// Save the form: append when idle, replace in place when editing.
    ///
    /// Invalid input leaves everything untouched. If the edited card vanished
    /// meanwhile nothing is written, the form is kept and the session drops
    /// back to `Idle`.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        self.form.validate().map_err(SubmitError::Invalid)?;
        let entry = self.form.clone().into_entry(&self.placeholder_img);

        let outcome = match self.session {
            EditSession::Idle => SubmitOutcome::Created(self.store.append(entry)?),
            EditSession::Editing(id) => match self.store.replace(id, entry) {
                Ok(index) => SubmitOutcome::Updated { id, index },
                Err(e) => {
                    log::warn!("Failed to save edit of {}: {}", id, e);
                    self.session = EditSession::Idle;
                    self.refresh();
                    return Err(e.into());
                }
            },
        };

        self.cancel_edit();
        self.refresh();
        Ok(outcome)
    }

    /// Remove `id`; an edit of that same card is cancelled.
    pub fn delete(&mut self, id: GameCardId) -> Result<GameCard, CatalogError> {
        let result = self.store.remove(id);
        if result.is_ok() && self.session == EditSession::Editing(id) {
            self.cancel_edit();
        }
        self.refresh();
        result
    }
}
