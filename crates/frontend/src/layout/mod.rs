pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Application shell: header on top, active page below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
