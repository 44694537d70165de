//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use eco_core::{ProgressSnapshot, Theme};

/// Everything the page renders from
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    pub theme: Theme,
    /// Latest progress recomputation
    pub snapshot: ProgressSnapshot,
    /// Ids of checked challenges, mirrored from the tracker
    pub checked: Vec<String>,
    /// Fact line, already prefixed
    pub fact: String,
    pub badge: String,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}
