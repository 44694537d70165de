//! Challenge List Component
//!
//! Checkbox list of eco challenges with a reset button.

use leptos::prelude::*;

use crate::context::ChallengeContext;
use crate::state::{use_page_store, PageStateStoreFields};

/// Challenge options (element id, label). Ids double as storage keys.
pub const CHALLENGES: &[(&str, &str)] = &[
    ("challenge1", "♻️ Recycle 5 plastic bottles"),
    ("challenge2", "🛍️ Use a reusable shopping bag"),
    ("challenge3", "🥤 Skip single-use straws for a week"),
    ("challenge4", "🍌 Compost your food scraps"),
    ("challenge5", "🔋 Drop off old batteries at a center"),
];

#[component]
pub fn ChallengeList() -> impl IntoView {
    let ctx = expect_context::<ChallengeContext>();
    let page = use_page_store();

    view! {
        <ul id="challengeList" class="challenge-list">
            {CHALLENGES.iter().map(|(id, label)| {
                let id = *id;
                let is_checked = move || page.checked().read().iter().any(|c| c.as_str() == id);
                view! {
                    <li class="challenge-item">
                        <label>
                            <input
                                type="checkbox"
                                id=id
                                prop:checked=is_checked
                                on:change=move |ev| ctx.toggle(id, event_target_checked(&ev))
                            />
                            " " {*label}
                        </label>
                    </li>
                }
            }).collect_view()}
        </ul>
        <button id="resetChallenges" class="reset-btn" on:click=move |_| ctx.reset()>
            "🔄 Reset Progress"
        </button>
    }
}
