use crate::domain::a001_game_card::ui::{CustomCatalogPage, GamesShowcasePage};
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::usecases::u501_contact_form::ContactForm;
use leptos::prelude::*;

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <section class="page home-page">
            <h1 class="page__title">"Hi, welcome to my site"</h1>
            <p class="page__lead">
                "A small collection of the games I enjoy, plus a catalog you can edit yourself."
            </p>
            <ContactForm />
        </section>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    ctx.init_router_integration();

    view! {
        <Shell>
            {move || match ctx.active.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Games => view! { <GamesShowcasePage /> }.into_any(),
                Page::Catalog => view! { <CustomCatalogPage /> }.into_any(),
            }}
        </Shell>
    }
}
