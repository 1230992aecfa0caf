use super::form::{GameCardField, GameCardForm};
use super::list::{project_cards, CardList};
use crate::domain::a001_game_card::actions::{confirm_in_browser, dispatch, CatalogAction};
use crate::domain::a001_game_card::session::CatalogController;
use crate::domain::a001_game_card::storage::CatalogStore;
use crate::shared::config::config;
use crate::shared::storage::BrowserStorage;
use leptos::prelude::*;

/// User catalog: create/edit form plus the editable card list
#[component]
pub fn CustomCatalogPage() -> impl IntoView {
    let cfg = config();
    let store = CatalogStore::open(BrowserStorage, cfg.storage.custom_key.clone());
    let ctl = RwSignal::new(CatalogController::new(
        store,
        cfg.catalog.placeholder_img.clone(),
    ));
    let error = RwSignal::new(None::<String>);

    let cards = Memo::new(move |_| ctl.with(|c| project_cards(c.records())));
    let form = Memo::new(move |_| ctl.with(|c| c.form().clone()));
    let editing = Memo::new(move |_| ctl.with(|c| c.is_editing()));
    let edit_index = Memo::new(move |_| ctl.with(|c| c.edit_index()));

    let on_action = Callback::new(move |action: CatalogAction| {
        match ctl.try_update(|c| dispatch(c, action, confirm_in_browser)) {
            Some(Ok(_)) => error.set(None),
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => {}
        }
    });

    let on_change = Callback::new(move |(field, value): (GameCardField, String)| {
        ctl.update(|c| field.apply(c.form_mut(), value));
    });

    let on_submit = Callback::new(move |_: ()| match ctl.try_update(|c| c.submit()) {
        Some(Ok(outcome)) => {
            log::debug!("Catalog saved: {:?}", outcome);
            error.set(None);
        }
        Some(Err(e)) => error.set(Some(e.to_string())),
        None => {}
    });

    let on_cancel = Callback::new(move |_: ()| {
        ctl.update(|c| c.cancel_edit());
        error.set(None);
    });

    view! {
        <section class="page catalog-page">
            <h1 class="page__title">"My game catalog"</h1>
            <GameCardForm
                form=form
                editing=editing
                edit_index=edit_index
                error=error
                on_change=on_change
                on_submit=on_submit
                on_cancel=on_cancel
            />
            <Show
                when=move || !cards.with(|c| c.is_empty())
                fallback=|| view! { <p class="page__empty">"No games yet. Add one above."</p> }
            >
                <CardList id="custom-list" cards=cards on_action=on_action />
            </Show>
        </section>
    }
}
