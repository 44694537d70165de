//! Eco Fact Component

use leptos::prelude::*;

use crate::state::{use_page_store, PageStateStoreFields};

/// Random fact, refreshed after every progress update
#[component]
pub fn EcoFact() -> impl IntoView {
    let page = use_page_store();

    view! {
        <div id="ecoFact" class="eco-fact">{move || page.fact().get()}</div>
    }
}
