//! UI Components
//!
//! Leptos components for each section of the page.

mod theme_toggle;
mod recycling_search;
mod challenge_list;
mod progress_panel;
mod eco_fact;
mod recycle_map;
mod sign_selector;

pub use theme_toggle::ThemeToggle;
pub use recycling_search::RecyclingSearch;
pub use challenge_list::{ChallengeList, CHALLENGES};
pub use progress_panel::ProgressPanel;
pub use eco_fact::EcoFact;
pub use recycle_map::RecycleMap;
pub use sign_selector::SignSelector;
