//! Recycling Search Component
//!
//! Item lookup against the static recycling guide.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;
use eco_core::{search, LookupOutcome, NOT_FOUND_MESSAGE};

/// How long the pulse class stays on a hit
const PULSE_MS: u32 = 1000;

/// Search box with result panel
#[component]
pub fn RecyclingSearch() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (outcome, set_outcome) = signal::<Option<LookupOutcome>>(None);
    let (pulsing, set_pulsing) = signal(false);

    let run_search = move || {
        let result = search(&query.get_untracked());
        if matches!(result, LookupOutcome::Found { .. }) {
            set_pulsing.set(true);
            spawn_local(async move {
                TimeoutFuture::new(PULSE_MS).await;
                set_pulsing.set(false);
            });
        }
        set_outcome.set(Some(result));
    };

    let result_class = move || {
        if pulsing.get() {
            "result animate__animated animate__pulse"
        } else {
            "result"
        }
    };

    view! {
        <div class="search-row">
            <input
                type="text"
                id="searchItem"
                placeholder="e.g. battery, pizza box, glass"
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        run_search();
                    }
                }
            />
            <button class="search-btn" on:click=move |_| run_search()>"Search"</button>
        </div>
        <div id="result" class=result_class>
            {move || outcome.get().map(|outcome| match outcome {
                LookupOutcome::Found { item, instruction } => view! {
                    "✅ " <strong>{item}</strong> ": " {instruction}
                }.into_any(),
                LookupOutcome::NotFound => view! {
                    <span>{NOT_FOUND_MESSAGE}</span>
                }.into_any(),
            })}
        </div>
    }
}
