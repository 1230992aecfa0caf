use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Portfolio"</span>
                <nav class="header__nav">
                    {Page::all()
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    type="button"
                                    class="button button--ghost"
                                    class=("button--active", move || ctx.active.get() == page)
                                    on:click=move |_| ctx.navigate(page)
                                >
                                    {page.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <ThemeToggle />
            </div>
        </header>
    }
}
