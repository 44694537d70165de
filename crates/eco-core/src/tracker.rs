//! Challenge Progress Tracker
//!
//! Owns the checked flags of the challenge list, mirrors them into a
//! `KeyValueStore` and notifies observers after every recomputation.
//!
//! A challenge is checked iff a value exists under its id in the store.

use crate::error::{EcoError, EcoResult};
use crate::progress::ProgressSnapshot;
use crate::store::KeyValueStore;

/// Value written under a challenge id when it is checked
pub const CHECKED_VALUE: &str = "true";

/// Observer called with each fresh snapshot
type Observer = Box<dyn FnMut(&ProgressSnapshot) + Send + Sync>;

/// One checkbox-tracked challenge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeItem {
    pub id: String,
    pub checked: bool,
}

pub struct ProgressTracker<S: KeyValueStore> {
    store: S,
    items: Vec<ChallengeItem>,
    observers: Vec<Observer>,
}

impl<S: KeyValueStore> ProgressTracker<S> {
    /// Tracker with every challenge unchecked. Reads nothing from the store.
    pub fn new<I, T>(store: S, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let items = ids
            .into_iter()
            .map(|id| ChallengeItem {
                id: id.into(),
                checked: false,
            })
            .collect();
        Self {
            store,
            items,
            observers: Vec::new(),
        }
    }

    /// Rebuild checked state for `ids` from the store
    pub fn load<I, T>(store: S, ids: I) -> EcoResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut tracker = Self::new(store, ids);
        for item in tracker.items.iter_mut() {
            item.checked = tracker.store.contains(&item.id)?;
        }
        log::debug!(
            "loaded {} challenges, {} checked",
            tracker.items.len(),
            tracker.items.iter().filter(|i| i.checked).count()
        );
        Ok(tracker)
    }

    /// Register an observer. Observers run in registration order.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&ProgressSnapshot) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn items(&self) -> &[ChallengeItem] {
        &self.items
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id && item.checked)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current snapshot without notifying anyone
    pub fn snapshot(&self) -> ProgressSnapshot {
        let checked = self.items.iter().filter(|item| item.checked).count();
        ProgressSnapshot::compute(checked, self.items.len())
    }

    /// Recompute and notify observers
    pub fn refresh(&mut self) -> ProgressSnapshot {
        let snapshot = self.snapshot();
        for observer in self.observers.iter_mut() {
            observer(&snapshot);
        }
        snapshot
    }

    /// Persist the new flag for `id`, then recompute.
    ///
    /// The in-memory flag only changes once the store write succeeds.
    pub fn toggle(&mut self, id: &str, checked: bool) -> EcoResult<ProgressSnapshot> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| EcoError::UnknownChallenge(id.to_string()))?;

        if checked {
            self.store.set(id, CHECKED_VALUE)?;
        } else {
            self.store.remove(id)?;
        }
        self.items[index].checked = checked;
        log::debug!("challenge {} -> {}", id, checked);

        Ok(self.refresh())
    }

    /// Uncheck every challenge and drop its persisted flag.
    ///
    /// Stops at the first failed remove. Observers still see the items
    /// cleared so far before the error is returned.
    pub fn reset(&mut self) -> EcoResult<ProgressSnapshot> {
        let mut failure = None;
        for item in self.items.iter_mut() {
            if let Err(err) = self.store.remove(&item.id) {
                failure = Some(err);
                break;
            }
            item.checked = false;
        }
        let snapshot = self.refresh();
        match failure {
            Some(err) => Err(err),
            None => {
                log::info!("reset {} challenges", self.items.len());
                Ok(snapshot)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::Tier;
    use crate::store::MemoryStore;
    use std::sync::{Arc, Mutex};

    const IDS: [&str; 5] = ["challenge1", "challenge2", "challenge3", "challenge4", "challenge5"];

    fn tracker_with(store: MemoryStore) -> ProgressTracker<MemoryStore> {
        ProgressTracker::load(store, IDS).expect("load failed")
    }

    #[test]
    fn test_load_reads_presence() {
        let mut store = MemoryStore::new();
        store.set("challenge2", "true").unwrap();
        // any value counts, not just "true"
        store.set("challenge4", "yes").unwrap();

        let tracker = tracker_with(store);
        assert!(tracker.is_checked("challenge2"));
        assert!(tracker.is_checked("challenge4"));
        assert!(!tracker.is_checked("challenge1"));
        assert_eq!(tracker.snapshot().checked, 2);
    }

    #[test]
    fn test_new_ignores_store() {
        let mut store = MemoryStore::new();
        store.set("challenge1", "true").unwrap();
        let tracker = ProgressTracker::new(store, IDS);
        assert!(!tracker.is_checked("challenge1"));
        assert_eq!(tracker.snapshot().total, 5);
    }

    #[test]
    fn test_toggle_persists_flag() {
        let mut tracker = tracker_with(MemoryStore::new());

        let snap = tracker.toggle("challenge3", true).unwrap();
        assert_eq!(snap.checked, 1);
        assert_eq!(tracker.store().get("challenge3").unwrap().as_deref(), Some(CHECKED_VALUE));

        let snap = tracker.toggle("challenge3", false).unwrap();
        assert_eq!(snap.checked, 0);
        assert!(tracker.store().is_empty());
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut tracker = tracker_with(MemoryStore::new());
        let err = tracker.toggle("nope", true).unwrap_err();
        assert_eq!(err, EcoError::UnknownChallenge("nope".to_string()));
        assert!(tracker.store().is_empty());
    }

    #[test]
    fn test_reset_clears_store() {
        let mut tracker = tracker_with(MemoryStore::new());
        for id in IDS {
            tracker.toggle(id, true).unwrap();
        }
        assert_eq!(tracker.store().len(), 5);

        let snap = tracker.reset().unwrap();
        assert_eq!(snap.checked, 0);
        assert_eq!(snap.tier, Tier::Beginner);
        assert!(tracker.store().is_empty());
        assert!(tracker.items().iter().all(|i| !i.checked));
    }

    #[test]
    fn test_reset_keeps_unrelated_keys() {
        let mut store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        store.set("challenge1", "true").unwrap();

        let mut tracker = tracker_with(store);
        tracker.reset().unwrap();
        assert_eq!(tracker.store().keys().collect::<Vec<_>>(), vec!["theme"]);
    }

    #[test]
    fn test_observers_see_every_recompute() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut tracker = tracker_with(MemoryStore::new());
        let sink = seen.clone();
        tracker.subscribe(move |snap| sink.lock().unwrap().push(snap.checked));

        tracker.refresh();
        tracker.toggle("challenge1", true).unwrap();
        tracker.toggle("challenge2", true).unwrap();
        tracker.reset().unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_observers_run_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut tracker = tracker_with(MemoryStore::new());
        let first = order.clone();
        tracker.subscribe(move |_| first.lock().unwrap().push("progress"));
        let second = order.clone();
        tracker.subscribe(move |_| second.lock().unwrap().push("badge"));

        tracker.refresh();
        assert_eq!(*order.lock().unwrap(), vec!["progress", "badge"]);
    }
}
