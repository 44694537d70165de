//! Progress Panel Component
//!
//! Progress bar, level text, badge and motivation line.

use leptos::prelude::*;

use crate::state::{use_page_store, PageStateStoreFields};

#[component]
pub fn ProgressPanel() -> impl IntoView {
    let page = use_page_store();
    let percent = move || page.snapshot().read().percent();

    view! {
        <div class="progress-panel">
            <div id="levelText" class="level-text">
                {move || page.snapshot().read().level_text()}
            </div>
            <div class="progress-track">
                <div
                    id="progressBar"
                    class="progress-bar"
                    role="progressbar"
                    tabindex="0"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || percent().to_string()
                    style:width=move || format!("{}%", percent())
                    style:background=move || page.snapshot().read().color()
                ></div>
            </div>
            <div id="ecoBadge" class="eco-badge">{move || page.badge().get()}</div>
            <div id="motivation" class="motivation">
                {move || page.snapshot().read().motivation()}
            </div>
        </div>
    }
}
