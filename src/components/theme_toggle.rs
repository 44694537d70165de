//! Theme Toggle Component
//!
//! Light/dark switch stored under the `theme` key.

use leptos::prelude::*;
use eco_core::{load_theme, toggle_theme, Theme};

use crate::state::{use_page_store, PageStateStoreFields};
use crate::storage::BrowserStore;

/// Set `data-theme` on `<html>`
fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Toggle button showing the theme a click switches to
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let page = use_page_store();

    let initial = load_theme(&BrowserStore).unwrap_or_else(|err| {
        log::warn!("could not read theme: {}", err);
        Theme::default()
    });
    apply_theme(initial);
    page.theme().set(initial);

    let toggle = move |_| {
        let current = page.theme().get_untracked();
        match toggle_theme(&mut BrowserStore, current) {
            Ok(next) => {
                apply_theme(next);
                page.theme().set(next);
            }
            Err(err) => log::warn!("could not save theme: {}", err),
        }
    };

    view! {
        <button id="themeToggle" class="theme-toggle" title="Toggle theme" on:click=toggle>
            {move || page.theme().get().indicator()}
        </button>
    }
}
