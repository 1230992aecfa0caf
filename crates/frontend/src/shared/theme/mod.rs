//! Theme management module for the application.
//!
//! Light/dark theme kept in a context signal, persisted in localStorage and
//! applied as `data-theme` on the document element, where the stylesheet's
//! CSS variables pick it up.

use crate::shared::config::config;
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme` and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse theme from string; unknown values fall back to the default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Load theme from storage.
pub fn load_theme<S: KeyValueStorage>(storage: &S, key: &str) -> Theme {
    storage
        .get_item(key)
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

/// Save theme to storage.
pub fn save_theme<S: KeyValueStorage>(storage: &S, key: &str, theme: Theme) {
    if let Err(e) = storage.set_item(key, theme.as_str()) {
        log::warn!("Failed to persist theme: {}", e);
    }
}

/// Set `data-theme` on the root element.
fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", theme.as_str());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme(&BrowserStorage, &config().storage.theme_key, theme);
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme(&BrowserStorage, &config().storage.theme_key);
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Light/dark toggle button.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let label = move || match ctx.theme.get() {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    view! {
        <button
            id="theme-toggle"
            type="button"
            class="button button--ghost"
            aria-label="Toggle theme"
            on:click=move |_| ctx.toggle()
        >
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn test_from_str() {
        assert_eq!(Theme::from_str("dark"), Theme::Dark);
        assert_eq!(Theme::from_str("light"), Theme::Light);
        assert_eq!(Theme::from_str("forest"), Theme::Light);
    }

    #[test]
    fn test_toggled_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_persisted_theme() {
        let storage = MemoryStorage::new();
        assert_eq!(load_theme(&storage, "theme"), Theme::Light);
        save_theme(&storage, "theme", Theme::Dark);
        assert_eq!(storage.get_item("theme").as_deref(), Some("dark"));
        assert_eq!(load_theme(&storage, "theme"), Theme::Dark);
    }
}
