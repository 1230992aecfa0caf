use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level pages of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Games,
    Catalog,
}

impl Page {
    pub fn all() -> [Page; 3] {
        [Page::Home, Page::Games, Page::Catalog]
    }

    /// Value of the `page` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Games => "games",
            Page::Catalog => "catalog",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "About & Contact",
            Page::Games => "Games",
            Page::Catalog => "My Catalog",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Self::all().into_iter().find(|p| p.key() == key)
    }
}

/// Page named by a `?page=...` query string
pub fn page_from_query(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("page").and_then(|key| Page::from_key(key))
}

pub fn query_for(page: Page) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([("page", page.key())])).unwrap_or_default();
    format!("?{}", query_string)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.key());
        self.active.set(page);
    }

    /// Pick the page from the URL, then keep the URL in sync with it.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query("?page=catalog"), Some(Page::Catalog));
        assert_eq!(page_from_query("page=games"), Some(Page::Games));
        assert_eq!(page_from_query("?page=nope"), None);
        assert_eq!(page_from_query(""), None);
    }

    #[test]
    fn test_query_for_round_trip() {
        for page in Page::all() {
            assert_eq!(page_from_query(&query_for(page)), Some(page));
        }
    }
}
