//! Edit/Delete controls raised from inside a card.
//!
//! Each control is built with the id of its card and reports a
//! [`CatalogAction`] through a callback; no DOM lookups are needed to find
//! out which card was clicked.

use super::session::CatalogController;
use super::storage::CatalogError;
use crate::shared::storage::KeyValueStorage;
use contracts::domain::a001_game_card::aggregate::GameCardId;

pub const DELETE_PROMPT: &str = "Delete this item?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogAction {
    Edit(GameCardId),
    Delete(GameCardId),
}

impl CatalogAction {
    /// Class marker carried by the control button
    pub fn marker(&self) -> &'static str {
        match self {
            CatalogAction::Edit(_) => "editBtn",
            CatalogAction::Delete(_) => "deleteBtn",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CatalogAction::Edit(_) => "Edit",
            CatalogAction::Delete(_) => "Delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    EditStarted,
    Deleted,
    DeleteDeclined,
}

/// Apply an action to the controller.
///
/// `confirm` is the blocking confirmation prompt; it is only asked for
/// deletes. A declined delete leaves everything untouched; otherwise the
/// controller records are refreshed, also on failure, so a stale list redraws.
pub fn dispatch<S, F>(
    controller: &mut CatalogController<S>,
    action: CatalogAction,
    confirm: F,
) -> Result<DispatchOutcome, CatalogError>
where
    S: KeyValueStorage,
    F: FnOnce(&str) -> bool,
{
    let result = match action {
        CatalogAction::Edit(id) => controller
            .begin_edit(id)
            .map(|_| DispatchOutcome::EditStarted),
        CatalogAction::Delete(id) => {
            if !confirm(DELETE_PROMPT) {
                return Ok(DispatchOutcome::DeleteDeclined);
            }
            controller.delete(id).map(|_| DispatchOutcome::Deleted)
        }
    };

    if let Err(e) = &result {
        log::warn!("{:?} failed: {}", action, e);
    }
    controller.refresh();
    result
}

/// `window.confirm`; false when there is no window.
pub fn confirm_in_browser(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_game_card::session::EditSession;
    use crate::domain::a001_game_card::storage::CatalogStore;
    use crate::shared::storage::MemoryStorage;
    use contracts::domain::a001_game_card::aggregate::CatalogEntry;

    fn controller_with(titles: &[&str]) -> CatalogController<MemoryStorage> {
        let store = CatalogStore::open(MemoryStorage::new(), "gameDataCustom");
        for t in titles {
            store
                .append(CatalogEntry {
                    title: t.to_string(),
                    ..Default::default()
                })
                .unwrap();
        }
        CatalogController::new(store, "images/default.jpg")
    }

    fn titles(c: &CatalogController<MemoryStorage>) -> Vec<String> {
        c.records().iter().map(|r| r.entry.title.clone()).collect()
    }

    #[test]
    fn test_declined_delete_is_a_no_op() {
        let mut c = controller_with(&["A", "B"]);
        let id = c.records()[0].id;
        let mut asked = None;
        let outcome = dispatch(&mut c, CatalogAction::Delete(id), |msg| {
            asked = Some(msg.to_string());
            false
        })
        .unwrap();

        assert_eq!(outcome, DispatchOutcome::DeleteDeclined);
        assert_eq!(asked.as_deref(), Some(DELETE_PROMPT));
        assert_eq!(titles(&c), vec!["A", "B"]);
    }

    #[test]
    fn test_confirmed_delete_removes_exactly_one() {
        let mut c = controller_with(&["A", "B", "C"]);
        let id = c.records()[1].id;
        let c_id = c.records()[2].id;

        let outcome = dispatch(&mut c, CatalogAction::Delete(id), |_| true).unwrap();
        assert_eq!(outcome, DispatchOutcome::Deleted);
        assert_eq!(titles(&c), vec!["A", "C"]);
        assert_eq!(c.records()[1].id, c_id);
    }

    #[test]
    fn test_edit_does_not_prompt() {
        let mut c = controller_with(&["A"]);
        let id = c.records()[0].id;
        let outcome = dispatch(&mut c, CatalogAction::Edit(id), |_| -> bool {
            panic!("edit must not ask for confirmation")
        })
        .unwrap();
        assert_eq!(outcome, DispatchOutcome::EditStarted);
        assert_eq!(c.session(), EditSession::Editing(id));
    }

    #[test]
    fn test_scenario_delete_edit_append() {
        let mut c = controller_with(&["A", "B", "C"]);

        let b = c.records()[1].id;
        dispatch(&mut c, CatalogAction::Delete(b), |_| true).unwrap();
        assert_eq!(titles(&c), vec!["A", "C"]);

        let now_second = c.records()[1].id;
        dispatch(&mut c, CatalogAction::Edit(now_second), |_| true).unwrap();
        assert_eq!(c.edit_index(), "1");
        c.form_mut().title = "C'".into();
        c.submit().unwrap();
        assert_eq!(titles(&c), vec!["A", "C'"]);

        c.form_mut().title = "D".into();
        c.submit().unwrap();
        assert_eq!(titles(&c), vec!["A", "C'", "D"]);
    }

    #[test]
    fn test_stale_delete_reports_not_found() {
        let mut c = controller_with(&["A"]);
        let id = c.records()[0].id;
        c.store().remove(id).unwrap();

        let result = dispatch(&mut c, CatalogAction::Delete(id), |_| true);
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
        assert!(c.records().is_empty());
    }

    #[test]
    fn test_markers() {
        let id = GameCardId::new_v4();
        assert_eq!(CatalogAction::Edit(id).marker(), "editBtn");
        assert_eq!(CatalogAction::Delete(id).marker(), "deleteBtn");
    }
}
