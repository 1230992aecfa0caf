use super::list::{project_entries, CardList, CardModel};
use crate::domain::a001_game_card::api::fetch_remote;
use crate::domain::a001_game_card::local_data::load_local_data;
use crate::shared::components::ui::Button;
use crate::shared::config::config;
use crate::shared::storage::BrowserStorage;
use leptos::prelude::*;

/// Read-only showcase: the built-in dataset or the remote one
#[component]
pub fn GamesShowcasePage() -> impl IntoView {
    let cards = RwSignal::new(Vec::<CardModel>::new());

    let load_local = Callback::new(move |_: leptos::ev::MouseEvent| {
        let entries = load_local_data(&BrowserStorage, &config().storage.local_key);
        cards.set(project_entries(&entries));
    });

    let load_remote = Callback::new(move |_: leptos::ev::MouseEvent| {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_remote(&config().remote.url).await {
                Ok(entries) => cards.set(project_entries(&entries)),
                Err(e) => log::error!("Remote fetch failed: {}", e),
            }
        });
    });

    view! {
        <section class="page games-page">
            <h1 class="page__title">"Games I play"</h1>
            <div class="page__actions">
                <Button id="loadLocal" on_click=load_local>"Load Local"</Button>
                <Button id="loadRemote" variant="secondary" on_click=load_remote>"Load Remote"</Button>
            </div>
            <CardList id="game-card-list" cards=cards />
        </section>
    }
}
