//! Sign Language Selector Component
//!
//! Dropdown of words; shows the sign image for the selected one.

use leptos::prelude::*;
use eco_core::{SignSelection, SIGN_PLACEHOLDER, SIGN_WORDS};

#[component]
pub fn SignSelector() -> impl IntoView {
    let (selection, set_selection) = signal(SignSelection::Placeholder);

    view! {
        <div class="sign-selector">
            <select
                id="signSelect"
                on:change=move |ev| set_selection.set(SignSelection::from_value(&event_target_value(&ev)))
            >
                <option value="">"-- Choose a word --"</option>
                {SIGN_WORDS.iter().map(|(value, label)| view! {
                    <option value={*value}>{*label}</option>
                }).collect_view()}
            </select>
            <div id="signResult" class="sign-result">
                {move || match selection.get() {
                    SignSelection::Placeholder => view! {
                        <p class="sign-placeholder">{SIGN_PLACEHOLDER}</p>
                    }.into_any(),
                    // broken images are left to the browser
                    SignSelection::Image { src, alt } => view! {
                        <img class="sign-image" src=src alt=alt />
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
