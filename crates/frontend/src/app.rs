use crate::domain::a001_game_card::local_data::seed_local_data;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::config;
use crate::shared::storage::BrowserStorage;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // The read-only showcase dataset is seeded once per browser.
    seed_local_data(&BrowserStorage, &config().storage.local_key);

    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}
