//! Challenge Context
//!
//! Shared handle to the progress tracker, provided via Leptos Context API.

use leptos::prelude::*;
use eco_core::{BadgeFactDecorator, ProgressTracker};

use crate::bindings;
use crate::state::{PageStateStoreFields, PageStore};
use crate::storage::BrowserStore;

/// Tracker plus the page store its observers write into
#[derive(Clone, Copy)]
pub struct ChallengeContext {
    tracker: StoredValue<ProgressTracker<BrowserStore>>,
    page: PageStore,
}

impl ChallengeContext {
    /// Load saved progress, register the page observers and render once
    pub fn new<'a>(page: PageStore, ids: impl IntoIterator<Item = &'a str>) -> Self {
        let ids: Vec<String> = ids.into_iter().map(str::to_string).collect();
        let mut tracker = ProgressTracker::load(BrowserStore, ids.clone()).unwrap_or_else(|err| {
            log::error!("could not read saved challenges: {}", err);
            ProgressTracker::new(BrowserStore, ids)
        });

        // Progress bar, level text and motivation
        tracker.subscribe(move |snapshot| {
            page.snapshot().set(snapshot.clone());
            if snapshot.celebrate {
                bindings::show_confetti();
            }
        });

        // Badge and fact
        let mut decorator = BadgeFactDecorator::new(js_sys::Math::random);
        tracker.subscribe(move |snapshot| {
            let decoration = decorator.decorate(snapshot);
            page.fact().set(decoration.fact_text());
            page.badge().set(decoration.badge.to_string());
        });

        tracker.refresh();

        let ctx = Self {
            tracker: StoredValue::new(tracker),
            page,
        };
        ctx.sync_checked();
        ctx
    }

    /// Checkbox change handler
    pub fn toggle(&self, id: &str, checked: bool) {
        self.tracker.update_value(|tracker| {
            if let Err(err) = tracker.toggle(id, checked) {
                log::warn!("could not update challenge {}: {}", id, err);
            }
        });
        self.sync_checked();
    }

    /// Reset button handler
    pub fn reset(&self) {
        self.tracker.update_value(|tracker| {
            if let Err(err) = tracker.reset() {
                log::warn!("could not reset challenges: {}", err);
            }
        });
        self.sync_checked();
    }

    /// Mirror tracker flags into the page store. A failed write puts the
    /// checkbox back to its persisted state.
    fn sync_checked(&self) {
        let checked = self.tracker.with_value(|tracker| {
            tracker
                .items()
                .iter()
                .filter(|item| item.checked)
                .map(|item| item.id.clone())
                .collect::<Vec<_>>()
        });
        self.page.checked().set(checked);
    }
}
