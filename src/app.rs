//! Eco Guide Frontend App
//!
//! Single-page layout: recycling search, map, challenges and sign lookup.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::ChallengeContext;
use crate::state::PageState;
use crate::components::{
    ChallengeList, EcoFact, ProgressPanel, RecycleMap, RecyclingSearch, SignSelector, ThemeToggle,
    CHALLENGES,
};

#[component]
pub fn App() -> impl IntoView {
    let page = Store::new(PageState::default());
    provide_context(page);

    // Loads saved progress and renders the first snapshot, fact and badge
    let challenges = ChallengeContext::new(page, CHALLENGES.iter().map(|(id, _)| *id));
    provide_context(challenges);

    log::info!("eco guide mounted with {} challenges", CHALLENGES.len());

    view! {
        <header class="site-header">
            <h1>"♻️ Eco Guide"</h1>
            <ThemeToggle />
        </header>

        <main class="page">
            <section class="card">
                <h2>"Recycling Guide"</h2>
                <RecyclingSearch />
            </section>

            <section class="card">
                <h2>"Recycling Centers Near You"</h2>
                <RecycleMap />
            </section>

            <section class="card">
                <h2>"Eco Challenges"</h2>
                <EcoFact />
                <ChallengeList />
                <ProgressPanel />
            </section>

            <section class="card">
                <h2>"Sign Language Corner"</h2>
                <SignSelector />
            </section>
        </main>
    }
}
